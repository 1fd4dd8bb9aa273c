/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Region Resolution
// ============================================================================
/// Primary environment variable consulted for the SES region
pub const PRIMARY_REGION_ENV: &str = "AWS_REGION";

/// Fallback environment variable consulted when the primary one is unset or empty
pub const SECONDARY_REGION_ENV: &str = "AMAZON_REGION";

/// Region used when neither environment variable yields a value
pub const DEFAULT_REGION: &str = "us-west-1";

// ============================================================================
// Provider Error Codes
// ============================================================================

/// SES error code returned when the access key is not recognised
pub const INVALID_CLIENT_TOKEN_CODE: &str = "InvalidClientTokenId";

/// Extra diagnostic emitted after an `InvalidClientTokenId` failure
pub const INVALID_CREDENTIALS_HINT: &str =
    "Probably wrong or missing key in $HOME/.aws/credentials for the active profile";

// ============================================================================
// Message Inlining
// ============================================================================

/// Placeholder replaced by the referenced file's contents when inlining is enabled
pub const FILE_REFERENCE_PATTERN: &str = r#"(?s)filename="(.+?)""#;

// ============================================================================
// Logging
// ============================================================================

/// Crates whose events follow the verbosity flag; everything else is capped at warn
pub const LOG_CRATES: &[&str] = &["sesmail_core", "sesmail_cli", "sesmail"];

/// Name of the root span every stage span hangs off
pub const ROOT_SPAN_NAME: &str = "sesmail";
