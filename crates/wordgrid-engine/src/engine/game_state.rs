use crate::{
    PlaceError,
    core::{
        board::{Board, Position},
        letter::Letter,
    },
};

use super::{
    player::{Player, PlayerId},
    tile_bag::TileBag,
    word::Placement,
};

/// Board, tile bag and both players.
///
/// This is the data the turn controller operates on. It knows how to draw
/// and place tiles, but not whose turn it is; see
/// [`GameSession`](super::GameSession) for that.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    bag: TileBag,
    players: [Player; 2],
}

impl GameState {
    /// Starts a game with an empty board and deals both racks from `bag`.
    #[must_use]
    pub fn new(bag: TileBag) -> Self {
        let mut this = Self {
            board: Board::EMPTY,
            bag,
            players: [Player::new(), Player::new()],
        };
        for id in PlayerId::ALL {
            this.draw(id);
        }
        this
    }

    /// Assembles a state from explicit parts, without dealing.
    #[must_use]
    pub fn from_parts(board: Board, bag: TileBag, players: [Player; 2]) -> Self {
        Self {
            board,
            bag,
            players,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Refills the player's rack from the bag. Returns the number of tiles drawn.
    pub fn draw(&mut self, id: PlayerId) -> usize {
        let rack = self.players[id.index()].rack_mut();
        self.bag.draw_into(rack)
    }

    /// Moves `letter` from the player's rack onto the empty cell at `pos`.
    ///
    /// On error nothing changes.
    pub fn place(&mut self, id: PlayerId, pos: Position, letter: Letter) -> Result<(), PlaceError> {
        let player = &mut self.players[id.index()];
        if !player.rack().contains(letter) {
            return Err(PlaceError::LetterNotInRack(letter));
        }
        self.board
            .try_set(pos, letter)
            .map_err(PlaceError::CellOccupied)?;
        player.rack_mut().remove(letter);
        player.record_placement(Placement::new(letter, pos));
        Ok(())
    }

    /// Whether the bag is empty and some player has run out of tiles.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.bag.is_empty() && self.players.iter().any(|p| p.rack().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use crate::{CellOccupiedError, Rack};

    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn letters(s: &str) -> impl Iterator<Item = Letter> + '_ {
        s.chars().filter_map(Letter::from_char)
    }

    #[test]
    fn test_new_deals_both_racks() {
        let state = GameState::new(TileBag::new());
        assert_eq!(state.player(PlayerId::One).rack().len(), 7);
        assert_eq!(state.player(PlayerId::Two).rack().len(), 7);
        assert_eq!(state.bag().len(), TileBag::INITIAL_LEN - 14);
        assert_eq!(state.board().letter_count(), 0);
    }

    #[test]
    fn test_new_deals_first_player_first() {
        let state = GameState::new(TileBag::from_tiles(letters("ABCDEFGHIJ")));
        let rack: String = state
            .player(PlayerId::One)
            .rack()
            .tiles()
            .iter()
            .map(|l| l.as_char())
            .collect();
        assert_eq!(rack, "ABCDEFG");
        assert_eq!(state.player(PlayerId::Two).rack().len(), 3);
        assert!(state.bag().is_empty());
        assert!(!state.is_exhausted());
    }

    #[test]
    fn test_place_moves_tile_from_rack_to_board() {
        let players = [Player::with_rack(letters("HAT").collect()), Player::new()];
        let mut state = GameState::from_parts(Board::EMPTY, TileBag::from_tiles([]), players);

        state.place(PlayerId::One, pos(7, 7), letter('A')).unwrap();

        assert_eq!(state.board().get(pos(7, 7)), Some(letter('A')));
        let player = state.player(PlayerId::One);
        assert_eq!(player.rack().len(), 2);
        assert!(!player.rack().contains(letter('A')));
        assert_eq!(player.placed(), &[Placement::new(letter('A'), pos(7, 7))]);
    }

    #[test]
    fn test_place_on_occupied_cell_changes_nothing() {
        let mut board = Board::EMPTY;
        board.try_set(pos(7, 8), letter('X')).unwrap();
        let players = [Player::with_rack(letters("HAT").collect()), Player::new()];
        let mut state = GameState::from_parts(board.clone(), TileBag::from_tiles([]), players);

        let err = state.place(PlayerId::One, pos(7, 8), letter('A'));

        assert_eq!(err, Err(PlaceError::CellOccupied(CellOccupiedError)));
        assert_eq!(state.board(), &board);
        assert_eq!(state.player(PlayerId::One).rack().len(), 3);
        assert!(state.player(PlayerId::One).placed().is_empty());
    }

    #[test]
    fn test_place_letter_not_in_rack_changes_nothing() {
        let players = [Player::with_rack(letters("HAT").collect()), Player::new()];
        let mut state = GameState::from_parts(Board::EMPTY, TileBag::from_tiles([]), players);

        let err = state.place(PlayerId::One, pos(0, 0), letter('Z'));

        assert_eq!(err, Err(PlaceError::LetterNotInRack(letter('Z'))));
        assert_eq!(state.board().letter_count(), 0);
        assert_eq!(state.player(PlayerId::One).rack().len(), 3);
    }

    #[test]
    fn test_is_exhausted() {
        let full = Player::with_rack(letters("AB").collect());
        let empty = Player::with_rack(Rack::new());

        let state = GameState::from_parts(
            Board::EMPTY,
            TileBag::from_tiles([]),
            [full.clone(), empty.clone()],
        );
        assert!(state.is_exhausted());

        let state = GameState::from_parts(
            Board::EMPTY,
            TileBag::from_tiles(letters("C")),
            [full.clone(), empty],
        );
        assert!(!state.is_exhausted());

        let state =
            GameState::from_parts(Board::EMPTY, TileBag::from_tiles([]), [full.clone(), full]);
        assert!(!state.is_exhausted());
    }
}
