/// The send pipeline: read, resolve, send, report
use crate::args::Cli;
use sesmail_core::email::{expand_file_references, render_raw_json};
use sesmail_core::services::Connector;
use sesmail_core::{LogContext, RawMessage, SendReceipt, SesMailError};
use std::io::Write;
use std::process::ExitCode;
use tracing::{Instrument, debug, error, info};

/// Runs one invocation and maps the outcome to an exit status
pub async fn execute(
    cli: &Cli,
    connector: &dyn Connector,
    out: &mut dyn Write,
    log: &LogContext,
) -> ExitCode {
    match run(cli, connector, out, log).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, log);
            ExitCode::FAILURE
        }
    }
}

/// Reads the message, then either prints it as JSON or sends it
///
/// Returns the SES receipt when a message was sent, `None` in JSON mode.
/// The file is read before any credential lookup, so a bad path never
/// reaches the network.
pub async fn run(
    cli: &Cli,
    connector: &dyn Connector,
    out: &mut dyn Write,
    log: &LogContext,
) -> Result<Option<SendReceipt>, SesMailError> {
    log.scope(async {
        debug!(file = %cli.raw_mail_file.display(), "Using");

        let message = load_message(cli).instrument(log.stage("read")).await?;

        if cli.json {
            emit_json(&message, out)?;
            return Ok(None);
        }

        let sender = connector.connect(log).await?;
        let receipt = sender
            .send_raw_email(&message, &cli.routing.send_options())
            .instrument(log.stage("send"))
            .await?;

        info!("{}", receipt);
        Ok::<_, SesMailError>(Some(receipt))
    })
    .await
}

async fn load_message(cli: &Cli) -> Result<RawMessage, SesMailError> {
    let message = RawMessage::read_from(&cli.raw_mail_file).await?;
    if cli.inline_files {
        expand_file_references(&message, None).await
    } else {
        Ok(message)
    }
}

fn emit_json(message: &RawMessage, out: &mut dyn Write) -> Result<(), SesMailError> {
    let document = render_raw_json(message)?;
    out.write_all(document.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| SesMailError::Output(format!("Failed to write JSON: {}", e)))
}

/// Logs a failure once, followed by the credentials hint when SES rejected the key
pub fn report(err: &SesMailError, log: &LogContext) {
    log.in_scope(|| {
        error!(
            kind = err.kind(),
            code = err.code().unwrap_or("-"),
            "{}",
            err
        );
        if let Some(hint) = err.hint() {
            error!("{}", hint);
        }
    });
}
