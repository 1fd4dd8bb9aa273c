/// Command line arguments
use clap::{Args, CommandFactory, Parser};
use sesmail_core::{SendOptions, SesMailError};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Send a raw RFC 5322 message through Amazon SES.
///
/// The region comes from AWS_REGION, then AMAZON_REGION, then us-west-1.
/// Credentials come from the shared credentials file (AWS_PROFILE or default).
#[derive(Debug, Parser)]
#[command(name = "sesmail", version)]
pub struct Cli {
    /// Raw mail file.
    #[arg(value_name = "RAW_MAIL_FILE")]
    pub raw_mail_file: PathBuf,

    /// Verbose mode.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print JSON for the send-raw-email tool instead of sending.
    #[arg(short, long)]
    pub json: bool,

    /// Replace every filename="<path>" in the message with the contents of <path>.
    #[arg(long)]
    pub inline_files: bool,

    #[command(flatten)]
    pub routing: RoutingArgs,
}

/// Optional SendRawEmail fields; SES falls back to the message headers
#[derive(Debug, Clone, Default, Args)]
pub struct RoutingArgs {
    /// Envelope sender address, overriding the From header.
    #[arg(long, value_name = "ADDRESS")]
    pub source: Option<String>,

    /// Identity ARN authorizing the From address (sending authorization).
    #[arg(long, value_name = "ARN")]
    pub from_arn: Option<String>,

    /// Identity ARN authorizing the envelope source.
    #[arg(long, value_name = "ARN")]
    pub source_arn: Option<String>,

    /// Identity ARN authorizing the Return-Path address.
    #[arg(long, value_name = "ARN")]
    pub return_path_arn: Option<String>,

    /// Envelope recipient; may be repeated. Defaults to the message headers.
    #[arg(long = "destination", value_name = "ADDRESS")]
    pub destinations: Vec<String>,

    /// Configuration set applied to the send.
    #[arg(long, value_name = "NAME")]
    pub configuration_set: Option<String>,
}

impl RoutingArgs {
    pub fn send_options(&self) -> SendOptions {
        SendOptions {
            source: self.source.clone(),
            from_arn: self.from_arn.clone(),
            source_arn: self.source_arn.clone(),
            return_path_arn: self.return_path_arn.clone(),
            destinations: self.destinations.clone(),
            configuration_set: self.configuration_set.clone(),
        }
    }
}

/// Parsing ended without something to run
#[derive(Debug)]
pub enum UsageExit {
    /// Help or version text that was asked for
    Info(String),
    /// Bad or missing arguments, carried as [`SesMailError::Usage`]
    Failed(SesMailError),
}

impl UsageExit {
    fn usage(text: impl Into<String>) -> Self {
        Self::Failed(SesMailError::Usage(text.into()))
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Info(_) => 0,
            Self::Failed(_) => 1,
        }
    }

    /// Text shown to the user; usage errors keep clap's rendering as is
    pub fn output(&self) -> String {
        match self {
            Self::Info(text) | Self::Failed(SesMailError::Usage(text)) => text.clone(),
            Self::Failed(err) => format!("{}\n", err),
        }
    }

    /// Writes the output to stderr for failures, stdout otherwise
    pub fn print(&self) -> ExitCode {
        let output = self.output();
        let written = match self {
            Self::Info(_) => std::io::stdout().write_all(output.as_bytes()),
            Self::Failed(_) => std::io::stderr().write_all(output.as_bytes()),
        };
        match written {
            Ok(()) => ExitCode::from(self.code()),
            Err(_) => ExitCode::FAILURE,
        }
    }
}

/// Parses `argv` (program name first)
///
/// With no arguments at all the help text is returned as a usage error so
/// that nothing is read and the process exits with status 1.
pub fn parse_from<I, T>(argv: I) -> Result<Cli, UsageExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() < 2 {
        return Err(UsageExit::usage(Cli::command().render_help().to_string()));
    }

    Cli::try_parse_from(argv).map_err(|err| {
        let output = err.render().to_string();
        if err.use_stderr() {
            UsageExit::usage(output)
        } else {
            UsageExit::Info(output)
        }
    })
}
