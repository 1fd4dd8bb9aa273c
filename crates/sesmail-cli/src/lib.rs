/// sesmail command line front-end
///
/// Reads a raw message file and either prints it as a `send-raw-email` JSON
/// document or submits it to SES.
pub mod app;
pub mod args;

pub use app::{execute, report, run};
pub use args::{Cli, RoutingArgs, UsageExit, parse_from};
pub use sesmail_core::*;
