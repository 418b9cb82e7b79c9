use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use xpost::cli::{run, Cli};
use xpost::config::{Config, DEFAULT_LOG_FILTER};
use xpost::PostGenerator;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configuration first: a missing API key must fail before anything else
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("エラーが発生しました: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr so stdout carries only the post. RUST_LOG is read once,
    // by Config; an unparsable value falls back to the default filter.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.rust_log)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting xpost v{}", env!("CARGO_PKG_VERSION"));

    let generator = PostGenerator::from_config(&config);

    eprintln!("🚀 X投稿を生成中...");
    match run(&cli, &generator).await {
        Ok(output) => {
            println!("\n{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "xpost exited with error");
            eprintln!("エラーが発生しました: {e:#}");
            ExitCode::FAILURE
        }
    }
}
