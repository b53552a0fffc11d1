use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Letter, Rack};

/// Number of tiles of each letter at the start of a game, indexed from `A`.
const TILE_DISTRIBUTION: [usize; Letter::LEN] = [
    9,  // A
    2,  // B
    2,  // C
    4,  // D
    12, // E
    2,  // F
    3,  // G
    2,  // H
    9,  // I
    1,  // J
    1,  // K
    4,  // L
    2,  // M
    6,  // N
    8,  // O
    2,  // P
    1,  // Q
    6,  // R
    4,  // S
    6,  // T
    6,  // U
    2,  // V
    2,  // W
    1,  // X
    2,  // Y
    1,  // Z
];

/// The pool of undrawn tiles.
///
/// A new bag holds the 100-tile English distribution, shuffled once with a
/// seeded generator. Drawing pops tiles off the shuffled sequence, which is
/// the same as drawing uniformly at random without replacement. The bag is
/// never refilled.
///
/// # Example
///
/// ```
/// use wordgrid_engine::{Rack, TileBag};
///
/// let mut bag = TileBag::new();
/// let mut rack = Rack::new();
///
/// assert_eq!(bag.draw_into(&mut rack), 7);
/// assert_eq!(bag.len(), TileBag::INITIAL_LEN - 7);
/// ```
#[derive(Debug, Clone)]
pub struct TileBag {
    seed: TileSeed,
    tiles: Vec<Letter>,
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed for deterministic tile shuffling.
///
/// A 128-bit seed written as 32 hex digits, both in `Display`/`FromStr` and in
/// its serde form. The same seed always yields the same draw order, which
/// makes games reproducible from the command line and in tests.
///
/// ```
/// use wordgrid_engine::TileSeed;
///
/// let seed: TileSeed = "0123456789abcdeffedcba9876543210".parse().unwrap();
/// assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseTileSeedError {
    #[display("invalid hex: expected 32 characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid hex: {_0}")]
    InvalidDigit(#[error(not(source))] String),
}

impl TileSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TileSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for TileSeed {
    type Err = ParseTileSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseTileSeedError::InvalidLength(s.len()));
        }
        // from_str_radix accepts a leading '+', which is not a hex digit
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseTileSeedError::InvalidDigit(s.to_owned()));
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|_| ParseTileSeedError::InvalidDigit(s.to_owned()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for TileSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TileSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `TileSeed` values with `rng.random()`.
impl Distribution<TileSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TileSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        TileSeed(seed)
    }
}

impl TileBag {
    /// Number of tiles in a fresh bag.
    pub const INITIAL_LEN: usize = 100;

    /// Creates a full bag shuffled with a random seed.
    ///
    /// For a reproducible draw order, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but shuffled with a specific seed.
    #[must_use]
    pub fn with_seed(seed: TileSeed) -> Self {
        let mut rng = Pcg32::from_seed(seed.0);
        let mut tiles: Vec<Letter> = Letter::all()
            .zip(TILE_DISTRIBUTION)
            .flat_map(|(letter, count)| std::iter::repeat_n(letter, count))
            .collect();
        debug_assert_eq!(tiles.len(), Self::INITIAL_LEN);
        tiles.shuffle(&mut rng);
        Self { seed, tiles }
    }

    /// Creates a bag that yields exactly `tiles`, first element first.
    ///
    /// Used to set up specific game situations.
    #[must_use]
    pub fn from_tiles<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = Letter>,
    {
        let mut tiles: Vec<Letter> = tiles.into_iter().collect();
        tiles.reverse();
        Self {
            seed: TileSeed([0; 16]),
            tiles,
        }
    }

    #[must_use]
    pub fn seed(&self) -> TileSeed {
        self.seed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draws a single tile, or `None` once the bag is exhausted.
    pub fn draw(&mut self) -> Option<Letter> {
        self.tiles.pop()
    }

    /// Draws tiles into `rack` until it is full or the bag runs out.
    ///
    /// Returns the number of tiles drawn.
    pub fn draw_into(&mut self, rack: &mut Rack) -> usize {
        let mut drawn = 0;
        while let Some(&tile) = self.tiles.last() {
            if rack.try_push(tile).is_err() {
                break;
            }
            self.tiles.pop();
            drawn += 1;
        }
        drawn
    }

    /// Counts the remaining tiles of each letter, indexed from `A`.
    #[must_use]
    pub fn remaining_counts(&self) -> [usize; Letter::LEN] {
        let mut counts = [0; Letter::LEN];
        for tile in &self.tiles {
            counts[tile.index()] += 1;
        }
        counts
    }
}
