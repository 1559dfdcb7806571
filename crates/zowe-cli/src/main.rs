//! zowe: command-line client for z/OS data sets over z/OSMF.

mod cli;
mod search;
mod session;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use zowe_config::ZoweConfig;

use crate::cli::{Args, Command, FilesCommand, SearchCommand};

fn load_config(args: &Args) -> Result<ZoweConfig, zowe_common::ConfigError> {
    match &args.config {
        Some(path) => zowe_config::load_config_from(path),
        None => zowe_config::load_config(),
    }
}

fn init_logging(args: &Args, config: &ZoweConfig) {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_directive());
    let directive = format!("zowe={level}");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "zowe=info".parse().expect("static directive")),
            ),
        )
        .init();
}

async fn run(args: &Args, config: &ZoweConfig) -> zowe_common::Result<ExitCode> {
    match &args.command {
        Command::Files {
            command:
                FilesCommand::Search {
                    command: SearchCommand::DataSets(search_args),
                },
        } => {
            let connection = session::connection_from_env(&config.zosmf)?;
            let response = search::run(search_args, &config.search, connection).await?;

            print!("{}", response.command_response);
            if !response.command_response.ends_with('\n') {
                println!();
            }
            if let Some(message) = &response.error_message {
                eprint!("{message}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("zowe: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&args, &config);
    tracing::debug!(?config, "config loaded");

    match run(&args, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("zowe: {e}");
            ExitCode::FAILURE
        }
    }
}
