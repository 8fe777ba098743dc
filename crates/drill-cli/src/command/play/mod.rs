use std::{num::NonZeroUsize, path::PathBuf};

use drill_engine::{DrillSeed, MAX_ROUNDS, catalog::Catalog};
use ratatui_runtime::ScreenStack;

use self::screens::MenuScreen;
use crate::{logging, util};

mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for reproducible color targets and kerning scrambles (random if omitted)
    #[clap(long)]
    pub(crate) seed: Option<u64>,
    /// Number of rounds in a color session
    #[clap(long, default_value_t = MAX_ROUNDS)]
    pub(crate) color_rounds: NonZeroUsize,
    /// Level catalog JSON file (built-in levels if omitted)
    #[clap(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Directory to write the log file to
    #[clap(long, default_value = "./data/logs/")]
    pub(crate) log_dir: PathBuf,
    /// Do not write a log file
    #[clap(long, default_value_t = false)]
    pub(crate) no_log: bool,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            color_rounds: MAX_ROUNDS,
            catalog: None,
            log_dir: PathBuf::from("./data/logs/"),
            no_log: false,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        color_rounds,
        catalog,
        log_dir,
        no_log,
    } = arg;

    if !*no_log {
        logging::init(log_dir)?;
    }

    let catalog = match catalog {
        Some(path) => util::read_catalog_file(path)?,
        None => Catalog::builtin(),
    };
    let seed = seed.map_or_else(DrillSeed::random, DrillSeed::from);
    tracing::info!(
        %seed,
        color_rounds = color_rounds.get(),
        shape_levels = catalog.shape.len(),
        kerning_levels = catalog.kerning.len(),
        layout_levels = catalog.layout.len(),
        "session started"
    );

    let mut app = ScreenStack::new(Box::new(MenuScreen::new(catalog, *color_rounds, seed)));
    ratatui_runtime::run(&mut app)?;

    tracing::info!("session ended");
    eprintln!("Seed: {seed} (pass --seed {seed} to replay)");
    Ok(())
}
