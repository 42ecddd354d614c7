//! mprisctl entry point.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use mprisctl::{
    cli::{CliService, Invocation, formatting::write_error},
    config::Config,
    services::SessionBus,
    tracing_config,
};
use tracing::warn;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let invocation = Invocation::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let _guard = match tracing_config::init(&config.general) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {e}");
    }

    let cli_service = CliService::new(SessionBus::new(), config.player.default_service);
    let mut stdout = io::stdout();

    match cli_service.run(&invocation, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let styled = stdout.is_terminal();
            if let Err(report_error) = write_error(&mut stdout, &e, styled) {
                warn!("Failed to report error: {report_error}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
