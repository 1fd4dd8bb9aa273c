/// sesmail core - resolve SES credentials and submit raw RFC 5322 messages
///
/// This crate holds the pieces shared by the `sesmail` command: the data
/// model, the configuration resolver, the single-shot send operation and
/// the logging context threaded through all of them.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::SesMailError;
pub use models::{RawMessage, SendOptions, SendReceipt};
pub use utils::logging::LogContext;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
