use arrayvec::ArrayVec;

use super::letter::Letter;

/// Maximum number of tiles a player can hold.
pub const RACK_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("rack is full")]
pub struct RackFullError;

/// The tiles a player currently holds, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: ArrayVec<Letter, RACK_SIZE>,
}

impl Rack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Letter] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.is_full()
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.tiles.contains(&letter)
    }

    pub fn try_push(&mut self, letter: Letter) -> Result<(), RackFullError> {
        self.tiles.try_push(letter).map_err(|_| RackFullError)
    }

    /// Removes one instance of `letter`, keeping the order of the rest.
    ///
    /// Returns `false` if the rack does not hold that letter.
    pub fn remove(&mut self, letter: Letter) -> bool {
        let Some(index) = self.tiles.iter().position(|&t| t == letter) else {
            return false;
        };
        self.tiles.remove(index);
        true
    }
}

impl FromIterator<Letter> for Rack {
    /// Collects up to [`RACK_SIZE`] tiles; extra tiles are dropped.
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().take(RACK_SIZE).collect(),
        }
    }
}
