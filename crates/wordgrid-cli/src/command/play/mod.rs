use std::path::PathBuf;

use anyhow::Context as _;
use wordgrid_engine::TileSeed;

use crate::{
    command::DEFAULT_DICTIONARY_PATH,
    tui::{Runtime, ScreenStack},
    util::Output,
};

use self::screens::{LoadingScreen, SummarySlot};

mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Word list file, one word per line
    #[clap(long, default_value = DEFAULT_DICTIONARY_PATH)]
    pub(super) dictionary: PathBuf,
    /// Tile bag seed as 32 hex digits (random if omitted)
    #[clap(long)]
    pub(super) seed: Option<TileSeed>,
    /// Print a JSON summary of the game to stdout on exit
    #[clap(long)]
    pub(super) summary: bool,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            seed: None,
            summary: false,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        dictionary,
        seed,
        summary,
    } = arg;

    let slot = SummarySlot::default();
    let loading = LoadingScreen::new(dictionary.clone(), *seed, slot.clone());
    let mut screens = ScreenStack::new(Box::new(loading));

    Runtime::new()
        .run(&mut screens)
        .context("Failed to run terminal UI")?;

    if *summary && let Some(game) = slot.take() {
        Output::save_json(&game, None)?;
    }

    Ok(())
}
