use sesmail_cli::services::SesConnector;
use sesmail_cli::{LogContext, execute, parse_from};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(exit) => return exit.print(),
    };

    let log = LogContext::stderr(cli.verbose);
    let connector = SesConnector::from_env();
    let mut stdout = std::io::stdout();

    execute(&cli, &connector, &mut stdout, &log).await
}
