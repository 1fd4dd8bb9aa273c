/// Configuration resolver - picks the SES region and validates credentials up front
use crate::constants::{DEFAULT_REGION, PRIMARY_REGION_ENV, SECONDARY_REGION_ENV};
use crate::error::SesMailError;
use crate::services::credentials::{CredentialSource, CredentialSourceProvider};
use crate::utils::logging::LogContext;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::error::CredentialsError;
use aws_smithy_types::error::display::DisplayErrorContext;
use std::fmt;
use std::sync::Arc;
use tracing::{Instrument, debug};

type EnvLookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Region plus a handle on the credential source, resolved once per run
#[derive(Clone)]
pub struct ServiceConfig {
    pub region: String,
    pub credentials: Arc<dyn CredentialSource>,
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl ServiceConfig {
    /// Shared SDK configuration for this region and credential source
    ///
    /// SDK retries are disabled: one call to SES is one round trip.
    pub async fn sdk_config(&self) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(CredentialSourceProvider::new(self.credentials.clone()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await
    }
}

/// Primary variable, then secondary, then the default; empty values count as unset
pub fn resolve_region_with<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    [PRIMARY_REGION_ENV, SECONDARY_REGION_ENV]
        .into_iter()
        .filter_map(&lookup)
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_string())
}

pub struct ConfigResolver {
    credentials: Arc<dyn CredentialSource>,
    env: Box<EnvLookup>,
}

impl ConfigResolver {
    /// Resolver reading the process environment
    pub fn new(credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            credentials,
            env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    /// Replaces the environment lookup
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Box::new(lookup);
        self
    }

    /// Resolves the region and fetches credentials once, so a broken
    /// credential setup fails here rather than during the send
    pub async fn resolve(&self, log: &LogContext) -> Result<ServiceConfig, SesMailError> {
        let verbose = log.is_verbose();

        async move {
            debug!("auth");

            let region = resolve_region_with(|key| (self.env)(key));
            debug!(region = %region);

            self.credentials
                .fetch()
                .await
                .map_err(|e| credentials_failure(&e, verbose))?;
            debug!("Credentials resolved");

            Ok::<_, SesMailError>(ServiceConfig {
                region,
                credentials: self.credentials.clone(),
            })
        }
        .instrument(log.stage("resolve"))
        .await
    }
}

/// Missing credentials versus a credential chain that could not be set up
fn credentials_failure(err: &CredentialsError, verbose: bool) -> SesMailError {
    let message = if verbose {
        DisplayErrorContext(err).to_string()
    } else {
        err.to_string()
    };

    match err {
        CredentialsError::CredentialsNotLoaded(_) => SesMailError::CredentialsUnavailable(message),
        _ => SesMailError::SessionInit(message),
    }
}
