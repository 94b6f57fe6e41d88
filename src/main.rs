use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use timeago::TimeAgo;
use timeago::messages::available_locales;
use timeago::util::config::AppConfig;
use timeago::util::time::parse_instant;

#[derive(Parser, Debug)]
#[command(name = "timeago", version, about = "Print localized 'time ago' phrases")]
struct Cli {
    /// Timestamps as RFC 3339 or epoch milliseconds (defaults to now)
    timestamps: Vec<String>,

    /// Locale tag, e.g. "es" or "pt-BR"
    #[arg(short, long)]
    locale: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List the shipped locales and exit
    #[arg(long)]
    list_locales: bool,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_locales {
        for locale in available_locales() {
            println!("{locale}");
        }
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    let messages = config.messages(cli.locale.as_deref())?;
    info!(locale = %messages.locale(), "timeago starting");

    let formatter = TimeAgo::new(&messages);
    if cli.timestamps.is_empty() {
        println!("{}", formatter.format(&Utc::now()));
        return Ok(());
    }

    for input in &cli.timestamps {
        let instant = match parse_instant(input) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("{e:#}");
                std::process::exit(1);
            }
        };
        println!("{}", formatter.format(&instant));
    }
    Ok(())
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "timeago.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("timeago=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
