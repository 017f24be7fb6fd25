use clap::Parser;
use market_sync::args::Args;
use market_sync::{api, commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level());
    debug!(
        "Log level set to {}",
        args.log_level().to_string().to_lowercase()
    );

    let code = match main_inner(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    };

    if args.pause() {
        wait_for_enter();
    }
    code
}

async fn main_inner(args: &Args) -> Result<()> {
    let config = Config::load(args.config())?;
    let input_dir = match args.input_dir() {
        Some(dir) => dir.to_path_buf(),
        None => config.input_dir(),
    };

    // This allows for testing the program without hitting the Google APIs. When
    // MARKET_SYNC_IN_TEST_MODE is set and non-zero in length, then the mode will be Mode::Test,
    // otherwise it will be Mode::Google.
    let mode = api::Mode::from_env();

    let mut store = api::store(&config, mode).await?;
    commands::run(&config, &input_dir, store.as_mut())
        .await?
        .print();
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Blocks until the operator presses Enter.
fn wait_for_enter() {
    println!("\nPress Enter to exit ...");
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}
