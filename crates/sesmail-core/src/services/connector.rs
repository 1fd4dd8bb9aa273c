/// Seam between configuration resolution and sending
use crate::error::SesMailError;
use crate::services::config::ConfigResolver;
use crate::services::credentials::ProfileCredentialSource;
use crate::services::ses::{RawEmailSender, SesRawEmailSender};
use crate::utils::logging::LogContext;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::Instrument;

/// Produces a ready-to-use sender, or fails before any message leaves the host
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, log: &LogContext) -> Result<Box<dyn RawEmailSender>, SesMailError>;
}

pub struct SesConnector {
    resolver: ConfigResolver,
}

impl SesConnector {
    pub fn new(resolver: ConfigResolver) -> Self {
        Self { resolver }
    }

    /// Shared credentials file and process environment
    pub fn from_env() -> Self {
        Self::new(ConfigResolver::new(Arc::new(ProfileCredentialSource::new())))
    }
}

#[async_trait]
impl Connector for SesConnector {
    async fn connect(&self, log: &LogContext) -> Result<Box<dyn RawEmailSender>, SesMailError> {
        let config = self.resolver.resolve(log).await?;

        let sender = SesRawEmailSender::from_config(&config)
            .instrument(log.stage("session"))
            .await;
        log.in_scope(|| tracing::debug!(region = %config.region, "Session created"));

        Ok(Box::new(sender))
    }
}
