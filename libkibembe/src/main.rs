use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use libkibembe::{
    History, HistoryRecord, KibembeConfig, Session, TranslateError, TranslateResult,
    SAMPLE_INPUTS,
};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "kibembe")]
#[command(about = "Translate numbers (digits or English words) into Kibembe numerals")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number to translate, e.g. `123` or `one hundred twenty three`
    input: Vec<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// History database file (overrides the configured one)
    #[arg(long, global = true)]
    history_file: Option<PathBuf>,

    /// Keep the history in memory for this run only
    #[arg(long, global = true)]
    no_history: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive REPL mode
    Repl,
    /// Show recent translations, newest first
    History {
        /// Print the history as JSON
        #[arg(long)]
        json: bool,
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Translate the preset sample inputs
    Samples,
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Forget all recorded translations
    Clear,
}

/// Install the stderr log subscriber.
///
/// `KIBEMBE_LOG` wins over the configured filter. Safe to call more than once.
fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("KIBEMBE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<KibembeConfig> {
    let mut cfg = match &cli.config {
        Some(path) => KibembeConfig::load_toml(path).map_err(|e| {
            anyhow::anyhow!("failed to load config {}: {}", path.display(), e)
        })?,
        None => KibembeConfig::default(),
    };
    if let Some(path) = &cli.history_file {
        cfg.history_path = Some(path.clone());
    }
    Ok(cfg)
}

fn open_session(cli: &Cli, cfg: &KibembeConfig) -> Session {
    let base = cfg.base();
    if cli.no_history {
        return Session::in_memory(base.history_limit);
    }

    let path = cfg.resolved_history_path();
    let history = History::open_redb(&path, &base.history_key, base.history_limit)
        .unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "history unavailable");
            eprintln!(
                "warning: failed to open history at {}: {} (using in-memory history)",
                path.display(),
                e
            );
            History::new_in_memory(base.history_limit)
        });
    Session::new(history)
}

fn print_history(records: &[HistoryRecord]) {
    if records.is_empty() {
        println!("No translations yet");
        return;
    }
    for r in records {
        let when = r.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
        println!("{} → {}  ({})", r.input, r.output, when);
    }
}

/// One REPL output line. Blank input is a prompt, not a failure, so it
/// gets no `Error:` prefix.
fn result_line(result: &TranslateResult<String>) -> String {
    match result {
        Ok(phrase) => format!("→ {}", phrase),
        Err(TranslateError::EmptyInput) => TranslateError::EmptyInput.to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

fn run_repl(session: &Session) -> Result<()> {
    println!("kibembe: type a number as digits or English words and press Enter");
    println!("Examples: 23, twenty-three, one hundred twenty three");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let raw = line.context("error reading stdin")?;
        println!("  {}", result_line(&session.translate(&raw)));
    }
    Ok(())
}

fn run_samples() {
    for sample in SAMPLE_INPUTS {
        match libkibembe::translate(sample) {
            Ok(phrase) => println!("{:<26} → {}", sample, phrase),
            Err(e) => println!("{:<26} → Error: {}", sample, e),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli)?;
    init_logging(&cfg.log_filter);

    match &cli.command {
        Some(Commands::Repl) => run_repl(&open_session(&cli, &cfg)),
        Some(Commands::History { json, action }) => {
            let session = open_session(&cli, &cfg);
            match action {
                Some(HistoryAction::Clear) => {
                    session.clear_history().context("failed to clear history")?;
                    println!("History cleared");
                }
                None if *json => {
                    let text = session
                        .history_store()
                        .export_json()
                        .context("failed to export history")?;
                    println!("{}", text);
                }
                None => {
                    let records = session.history().context("failed to read history")?;
                    print_history(&records);
                }
            }
            Ok(())
        }
        Some(Commands::Samples) => {
            run_samples();
            Ok(())
        }
        Some(Commands::Config) => {
            let text = cfg.to_toml_string().context("failed to serialize config")?;
            print!("{}", text);
            Ok(())
        }
        None if cli.input.is_empty() => run_repl(&open_session(&cli, &cfg)),
        None => {
            let session = open_session(&cli, &cfg);
            let phrase = session.translate(&cli.input.join(" "))?;
            println!("{}", phrase);
            Ok(())
        }
    }
}
