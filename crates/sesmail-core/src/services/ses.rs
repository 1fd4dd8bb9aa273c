/// SES raw email sending service
use crate::error::SesMailError;
use crate::models::{RawMessage, SendOptions, SendReceipt};
use crate::services::config::ServiceConfig;
use async_trait::async_trait;
use aws_sdk_ses::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_ses::operation::RequestId;
use aws_smithy_types::Blob;
use aws_smithy_types::error::display::DisplayErrorContext;
use std::error::Error;
use std::fmt;

#[async_trait]
pub trait RawEmailSender: Send + Sync {
    /// Submits `message` verbatim; exactly one request, no retries
    async fn send_raw_email(
        &self,
        message: &RawMessage,
        options: &SendOptions,
    ) -> Result<SendReceipt, SesMailError>;
}

pub struct SesRawEmailSender {
    client: aws_sdk_ses::Client,
}

impl SesRawEmailSender {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }

    /// Client bound to the resolved region and credential source
    pub async fn from_config(config: &ServiceConfig) -> Self {
        let sdk_config = config.sdk_config().await;
        Self::new(aws_sdk_ses::Client::new(&sdk_config))
    }
}

#[async_trait]
impl RawEmailSender for SesRawEmailSender {
    async fn send_raw_email(
        &self,
        message: &RawMessage,
        options: &SendOptions,
    ) -> Result<SendReceipt, SesMailError> {
        tracing::debug!("Sending ... ");

        let raw_message = aws_sdk_ses::types::RawMessage::builder()
            .data(Blob::new(message.as_bytes()))
            .build()
            .map_err(|e| SesMailError::Send {
                code: None,
                message: format!("Failed to build raw message: {}", e),
            })?;

        let response = self
            .client
            .send_raw_email()
            .raw_message(raw_message)
            .set_source(options.source.clone())
            .set_from_arn(options.from_arn.clone())
            .set_source_arn(options.source_arn.clone())
            .set_return_path_arn(options.return_path_arn.clone())
            .set_destinations(options.destinations())
            .set_configuration_set_name(options.configuration_set.clone())
            .send()
            .await
            .map_err(send_failure)?;

        tracing::debug!("send is complete");

        Ok(SendReceipt {
            request_id: response.request_id().map(str::to_string),
            message_id: response.message_id,
        })
    }
}

/// Keeps the provider's error code so callers can special-case it
pub fn send_failure<E, R>(err: SdkError<E, R>) -> SesMailError
where
    E: ProvideErrorMetadata + Error + 'static,
    R: fmt::Debug,
{
    match err.as_service_error() {
        Some(service_err) => SesMailError::Send {
            code: service_err.code().map(str::to_string),
            message: service_err
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| DisplayErrorContext(service_err).to_string()),
        },
        None => SesMailError::Send {
            code: None,
            message: DisplayErrorContext(&err).to_string(),
        },
    }
}
