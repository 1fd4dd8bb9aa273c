/// Error types for sesmail
use crate::constants::{INVALID_CLIENT_TOKEN_CODE, INVALID_CREDENTIALS_HINT};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SesMailError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("File error: {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: credentials unavailable: {0}")]
    CredentialsUnavailable(String),

    #[error("Configuration error: session init failed: {0}")]
    SessionInit(String),

    #[error("Send error: {}", describe_send(.code.as_deref(), .message))]
    Send {
        code: Option<String>,
        message: String,
    },

    #[error("Output error: {0}")]
    Output(String),
}

fn describe_send(code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) => format!("[{}] {}", code, message),
        None => message.to_string(),
    }
}

impl SesMailError {
    /// Builds a file error for `path`
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// Stable, lower-case name of the error category, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::File { .. } => "file",
            Self::CredentialsUnavailable(_) | Self::SessionInit(_) => "config",
            Self::Send { .. } => "send",
            Self::Output(_) => "output",
        }
    }

    /// Provider-specific error code, only ever present on send failures
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Send { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Whether SES rejected the request because the access key is unknown
    pub fn is_invalid_credentials(&self) -> bool {
        self.code() == Some(INVALID_CLIENT_TOKEN_CODE)
    }

    /// Additional human-readable diagnostic to log after the error itself
    pub fn hint(&self) -> Option<&'static str> {
        self.is_invalid_credentials()
            .then_some(INVALID_CREDENTIALS_HINT)
    }
}

impl From<serde_json::Error> for SesMailError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
