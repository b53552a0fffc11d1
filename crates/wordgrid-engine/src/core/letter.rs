use std::fmt;

use serde::{Deserialize, Serialize};

/// Point value of each letter, indexed from `A`.
const LETTER_VALUES: [u32; Letter::LEN] = [
    1,  // A
    3,  // B
    3,  // C
    2,  // D
    1,  // E
    4,  // F
    2,  // G
    4,  // H
    1,  // I
    8,  // J
    5,  // K
    1,  // L
    3,  // M
    1,  // N
    1,  // O
    3,  // P
    10, // Q
    1,  // R
    1,  // S
    1,  // T
    1,  // U
    4,  // V
    4,  // W
    8,  // X
    4,  // Y
    10, // Z
];

/// A single uppercase letter tile.
///
/// Letters are always stored in uppercase. Lowercase input is normalized by
/// [`Letter::from_char`], so `'h'` and `'H'` produce the same tile.
///
/// # Example
///
/// ```
/// use wordgrid_engine::Letter;
///
/// let q = Letter::from_char('q').unwrap();
/// assert_eq!(q.as_char(), 'Q');
/// assert_eq!(q.value(), 10);
/// assert_eq!(Letter::from_char('?'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct Letter(u8);

impl Letter {
    /// Number of distinct letters.
    pub const LEN: usize = 26;

    /// Converts an ASCII letter (either case) into a tile.
    ///
    /// Returns `None` for anything outside `A-Z`/`a-z`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let byte = c.to_ascii_uppercase() as u8;
        Some(Self(byte))
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based index of the letter in the alphabet.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Point value of this letter.
    #[must_use]
    pub const fn value(self) -> u32 {
        LETTER_VALUES[self.index()]
    }

    /// Iterates over `A..=Z` in alphabetical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("not a letter: {_0:?}")]
pub struct InvalidLetterError(#[error(not(source))] pub char);

impl TryFrom<char> for Letter {
    type Error = InvalidLetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(InvalidLetterError(c))
    }
}

/// Sums the letter values of `word`.
///
/// Returns `None` if `word` contains anything other than ASCII letters.
/// The empty word scores zero.
///
/// # Example
///
/// ```
/// use wordgrid_engine::word_value;
///
/// assert_eq!(word_value("hat"), Some(6));
/// assert_eq!(word_value("it's"), None);
/// ```
#[must_use]
pub fn word_value(word: &str) -> Option<u32> {
    word.chars()
        .map(|c| Letter::from_char(c).map(Letter::value))
        .sum()
}
