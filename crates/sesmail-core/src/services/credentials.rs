/// Credential capability consulted by the configuration resolver and the SES client
use async_trait::async_trait;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_credential_types::Credentials;
use aws_credential_types::provider::error::CredentialsError;
use aws_credential_types::provider::{ProvideCredentials, future};
use std::fmt;
use std::sync::Arc;

/// Narrow capability that yields authentication material on demand
#[async_trait]
pub trait CredentialSource: fmt::Debug + Send + Sync {
    async fn fetch(&self) -> Result<Credentials, CredentialsError>;
}

/// Shared credentials file (`~/.aws/credentials`), active profile
///
/// The profile is taken from `AWS_PROFILE` and falls back to `default`.
/// The file is never parsed here; the SDK provider owns the format.
#[derive(Debug)]
pub struct ProfileCredentialSource {
    provider: ProfileFileCredentialsProvider,
}

impl ProfileCredentialSource {
    pub fn new() -> Self {
        Self {
            provider: ProfileFileCredentialsProvider::builder().build(),
        }
    }
}

impl Default for ProfileCredentialSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialSource for ProfileCredentialSource {
    async fn fetch(&self) -> Result<Credentials, CredentialsError> {
        self.provider.provide_credentials().await
    }
}

/// Exposes a [`CredentialSource`] to the SDK so request signing consults the same source
#[derive(Debug, Clone)]
pub struct CredentialSourceProvider {
    source: Arc<dyn CredentialSource>,
}

impl CredentialSourceProvider {
    pub fn new(source: Arc<dyn CredentialSource>) -> Self {
        Self { source }
    }
}

impl ProvideCredentials for CredentialSourceProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::new(self.source.fetch())
    }
}
