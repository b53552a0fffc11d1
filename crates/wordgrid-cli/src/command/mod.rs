use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::{self, LogTarget};

use self::{check::CheckArg, play::PlayArg};

mod check;
mod play;

const DEFAULT_DICTIONARY_PATH: &str = "words.txt";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write log files into this directory
    #[clap(long, global = true)]
    log_dir: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a two-player game in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Look up words in the dictionary and score them
    Check(#[clap(flatten)] CheckArg),
}

impl CommandArgs {
    fn log_target(&self) -> LogTarget {
        match (&self.log_dir, &self.mode) {
            (Some(dir), _) => LogTarget::File(dir.clone()),
            (None, Some(Mode::Check(_))) => LogTarget::Stderr,
            (None, Some(Mode::Play(_)) | None) => LogTarget::Off,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let _logger = logging::init(&args.log_target())?;

    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Check(arg) => check::run(&arg)?,
    }
    Ok(())
}
