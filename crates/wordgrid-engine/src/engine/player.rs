use serde::Serialize;

use crate::{Placement, Rack};

/// Identifies one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum PlayerId {
    #[display("Player 1")]
    One,
    #[display("Player 2")]
    Two,
}

impl PlayerId {
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Per-player state: held tiles, accumulated score and this turn's placements.
#[derive(Debug, Clone, Default)]
pub struct Player {
    rack: Rack,
    score: u32,
    placed: Vec<Placement>,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rack(rack: Rack) -> Self {
        Self {
            rack,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub(crate) fn rack_mut(&mut self) -> &mut Rack {
        &mut self.rack
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Tiles placed in the turn in progress, in placement order.
    #[must_use]
    pub fn placed(&self) -> &[Placement] {
        &self.placed
    }

    pub(crate) fn record_placement(&mut self, placement: Placement) {
        self.placed.push(placement);
    }

    /// Adds `points` and starts a fresh turn.
    pub(crate) fn commit_turn(&mut self, points: u32) {
        self.score += points;
        self.placed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_alternates() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
        assert_eq!(PlayerId::One.to_string(), "Player 1");
        assert_eq!(PlayerId::Two.to_string(), "Player 2");
        for (i, id) in PlayerId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }
}
