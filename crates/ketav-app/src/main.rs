use clap::Parser;
use ketav_config::logging::LoggingConfig;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod profile;
mod state;

use self::cli::Cli;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = profile::load_config(cli.config.as_deref())?;
    init_tracing(&config.logging);

    let state = AppState::new(config);
    let report = commands::run(&state, cli.command)?;

    if cli.plain {
        println!("{}", report.plain);
    } else {
        println!("{}", serde_json::to_string_pretty(&report.json)?);
    }

    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
