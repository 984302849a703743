//! Runs the interactive to-do list on the current terminal.
//!
//! Usage:
//!
//! ```text
//! ticklist [--config <path>]
//! ```
//!
//! The configuration path may also be given through `TICKLIST_CONFIG`. Type
//! `help` at the prompt for the command list.

use camino::Utf8PathBuf;
use clap::Parser;
use mockable::{Clock, DefaultClock};
use std::io;
use ticklist::{
    config::{AppConfig, CONFIG_ENV_VAR},
    shell::Session,
    telemetry,
    todo::{
        adapters::{SequentialIdSource, UuidIdSource},
        ports::IdSource,
        services::TodoStore,
        view::TextRenderer,
    },
};
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Terminal to-do list.
#[derive(Debug, Parser)]
#[command(name = "ticklist", version, about)]
struct Cli {
    /// Path to a JSON configuration file.
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<Utf8PathBuf>,
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    telemetry::init(config.log_filter());
    info!(
        config = cli.config.as_ref().map_or("(default)", |path| path.as_str()),
        seeds = config.seed_tasks.len(),
        deterministic_ids = config.deterministic_ids,
        "loaded configuration"
    );

    let renderer = match config.list_template.as_deref() {
        Some(template) => TextRenderer::with_template(template)?,
        None => TextRenderer::new(),
    };

    if config.deterministic_ids {
        run(SequentialIdSource::new(), DefaultClock, &config, renderer)
    } else {
        run(UuidIdSource, DefaultClock, &config, renderer)
    }
}

fn run<I, C>(ids: I, clock: C, config: &AppConfig, renderer: TextRenderer) -> Result<(), BoxError>
where
    I: IdSource,
    C: Clock,
{
    let store = TodoStore::with_seed(ids, clock, config.seed_tasks.iter().cloned());
    let mut session = Session::new(store, renderer);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
