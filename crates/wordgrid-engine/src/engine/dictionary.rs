use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

/// Words used when the word list cannot be loaded.
pub const FALLBACK_WORDS: [&str; 10] = [
    "CAT", "DOG", "BAT", "RAT", "HAT", "MAT", "FROG", "TOAD", "PLAY", "GAME",
];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DictionaryLoadError {
    #[display("failed to read dictionary file {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("dictionary file {} contains no words", path.display())]
    Empty {
        #[error(not(source))]
        path: PathBuf,
    },
}

/// The set of words accepted as valid plays.
///
/// Words are stored trimmed and uppercased. Lookups normalize the queried
/// word the same way, so membership is case-insensitive.
///
/// # Example
///
/// ```
/// use wordgrid_engine::Dictionary;
///
/// let dictionary = Dictionary::parse("cat\n  Dog \n\nfrog\n");
/// assert_eq!(dictionary.len(), 3);
/// assert!(dictionary.contains("DOG"));
/// assert!(dictionary.contains("frog"));
/// assert!(!dictionary.contains(""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

/// The outcome of [`Dictionary::load_or_fallback`].
#[derive(Debug)]
pub struct LoadedDictionary {
    pub dictionary: Dictionary,
    /// Why the fallback list is in use, if it is.
    pub fallback_cause: Option<DictionaryLoadError>,
}

impl LoadedDictionary {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback_cause.is_some()
    }
}

impl Dictionary {
    /// Builds a dictionary from individual words, dropping blank entries.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Parses a word list with one word per line.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_WORDS)
    }

    /// Reads a word list file.
    ///
    /// A file with no words is an error, since no play could ever be valid.
    pub fn load(path: &Path) -> Result<Self, DictionaryLoadError> {
        let text = fs::read_to_string(path).map_err(|source| DictionaryLoadError::Read {
            path: path.to_owned(),
            source,
        })?;
        let dictionary = Self::parse(&text);
        if dictionary.is_empty() {
            return Err(DictionaryLoadError::Empty {
                path: path.to_owned(),
            });
        }
        Ok(dictionary)
    }

    /// Reads a word list file, substituting [`FALLBACK_WORDS`] on failure.
    #[must_use]
    pub fn load_or_fallback(path: &Path) -> LoadedDictionary {
        match Self::load(path) {
            Ok(dictionary) => {
                log::info!(
                    "loaded {} words into dictionary from {}",
                    dictionary.len(),
                    path.display()
                );
                LoadedDictionary {
                    dictionary,
                    fallback_cause: None,
                }
            }
            Err(err) => {
                log::warn!("{err}; using fallback word list");
                LoadedDictionary {
                    dictionary: Self::fallback(),
                    fallback_cause: Some(err),
                }
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks membership, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim();
        if word.chars().any(char::is_lowercase) {
            self.words.contains(&word.to_uppercase())
        } else {
            self.words.contains(word)
        }
    }
}
