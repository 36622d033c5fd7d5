use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{anyhow, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use shared::{
    domain::{AthleteId, EventId},
    navigation::{CategoryFilter, Tab},
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use view_model::CatalogViewModel;

mod config;
mod controller;
mod ui;

use config::{load_settings, render_settings};
use controller::{
    events::{UiAction, UiError},
    orchestration::run_session,
    reducer::Session,
};
use ui::ScreenOptions;

#[derive(Parser, Debug)]
#[command(name = "rinkside", about = "Figure skating guide for the Milano Cortina games")]
struct Cli {
    /// Settings file; defaults to ./rinkside.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Catalog JSON to load instead of the embedded one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Reject athletes whose country code is not in the catalog.
    #[arg(long, global = true)]
    strict: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Landing screen: counts, top contenders, events.
    Home,
    /// Every event with its schedule summary.
    Events,
    /// One event with its segments and roster.
    Event { id: String },
    /// The athlete list.
    Athletes {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// One athlete's profile.
    Athlete { id: String },
    /// Explains an element code such as 4Lz or 3A.
    Element { code: String },
    /// Interactive session reading commands from stdin.
    Browse,
    /// Prints the effective settings as TOML.
    Settings,
}

impl Command {
    /// Actions that put a fresh session on the requested screen.
    fn opening_actions(self) -> Vec<UiAction> {
        match self {
            Command::Home | Command::Browse | Command::Settings => Vec::new(),
            Command::Events => vec![UiAction::Tab(Tab::Schedule)],
            Command::Event { id } => vec![UiAction::OpenEvent(EventId::new(id))],
            Command::Athletes { search, category } => {
                vec![UiAction::Search(search), UiAction::Filter(category)]
            }
            Command::Athlete { id } => vec![UiAction::OpenAthlete(AthleteId::new(id))],
            Command::Element { code } => vec![UiAction::ShowElement(code)],
        }
    }
}

fn ui_failure(err: UiError) -> anyhow::Error {
    anyhow!(err.message().to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    settings.apply_overrides(cli.catalog, cli.strict);

    let command = cli.command.unwrap_or(Command::Home);
    if matches!(command, Command::Settings) {
        print!("{}", render_settings(&settings)?);
        return Ok(());
    }
    let browse = matches!(command, Command::Browse);

    let catalog = Arc::new(Catalog::load(
        settings.catalog_path.as_deref(),
        settings.reference_policy(),
    )?);
    info!(
        athletes = catalog.athletes().len(),
        events = catalog.events().len(),
        "catalog ready"
    );

    let options = ScreenOptions::from(&settings);
    let mut session = Session::new(CatalogViewModel::new(catalog));
    for action in command.opening_actions() {
        session.apply(action).map_err(ui_failure)?;
    }

    if browse {
        let stdin = io::stdin();
        return run_session(&mut session, &options, stdin.lock(), io::stdout().lock());
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", ui::render(&session, &options))?;
    Ok(())
}
