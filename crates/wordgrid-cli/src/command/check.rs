use std::path::PathBuf;

use serde::Serialize;
use wordgrid_engine::{Dictionary, word_value};

use crate::{command::DEFAULT_DICTIONARY_PATH, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CheckArg {
    /// Word list file, one word per line
    #[clap(long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,
    /// Output file path (stdout if omitted)
    #[clap(long)]
    output: Option<PathBuf>,
    /// Words to look up
    #[clap(required = true)]
    words: Vec<String>,
}

/// Lookup result for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct WordCheck {
    word: String,
    /// Sum of letter values, absent if the word contains a non-letter.
    score: Option<u32>,
    valid: bool,
}

impl WordCheck {
    fn new(dictionary: &Dictionary, word: &str) -> Self {
        let word = word.trim().to_uppercase();
        Self {
            score: word_value(&word),
            valid: dictionary.contains(&word),
            word,
        }
    }
}

pub(crate) fn run(arg: &CheckArg) -> anyhow::Result<()> {
    let CheckArg {
        dictionary,
        output,
        words,
    } = arg;

    let loaded = Dictionary::load_or_fallback(dictionary);
    let checks = words
        .iter()
        .map(|word| WordCheck::new(&loaded.dictionary, word))
        .collect::<Vec<_>>();
    log::info!(
        "checked {} words, {} valid",
        checks.len(),
        checks.iter().filter(|check| check.valid).count()
    );

    Output::save_json(&checks, output.clone())
}
