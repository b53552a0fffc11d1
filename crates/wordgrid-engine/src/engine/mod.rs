//! Game rules and turn flow.
//!
//! This module builds the two-player word game on top of the core board,
//! letter and rack types:
//!
//! - [`Dictionary`] - Set of valid words, loaded from a word list or the fallback list
//! - [`TileBag`] - The 100 letter tiles, shuffled from a [`TileSeed`]
//! - [`Player`] - Rack, score and the current turn's placements
//! - [`GameState`] - Board, bag and both players
//! - [`GameSession`] - Turn controller with history and game-over detection
//! - [`extract_word`] / [`validate_word`] - Reading and checking a turn's word
//!
//! # Game Flow
//!
//! 1. Load a [`Dictionary`] and start a [`GameSession`]; each player is dealt 7 tiles
//! 2. The current player places tiles from their rack onto empty cells
//! 3. Submitting reads the word spanned by the placed tiles
//! 4. A valid word is scored, the rack is refilled and the turn passes
//! 5. Once the bag is empty and a rack runs out, the higher score wins
//!
//! # Example
//!
//! ```
//! use wordgrid_engine::{Board, Dictionary, GameSession, GameState, Player, PlayerId, Position, TileBag};
//!
//! let rack = "HATXYZQ".chars().filter_map(wordgrid_engine::Letter::from_char).collect();
//! let state = GameState::from_parts(
//!     Board::EMPTY,
//!     TileBag::new(),
//!     [Player::with_rack(rack), Player::new()],
//! );
//! let mut session = GameSession::from_state(Dictionary::fallback(), state);
//!
//! for (i, c) in "HAT".chars().enumerate() {
//!     let pos = Position::new(7, 7 + i).unwrap();
//!     let letter = wordgrid_engine::Letter::from_char(c).unwrap();
//!     session.place(pos, letter).unwrap();
//! }
//!
//! let outcome = session.submit().unwrap();
//! assert_eq!(outcome.played.score(), 6);
//! assert_eq!(session.current_player(), Some(PlayerId::Two));
//! ```

pub use self::{dictionary::*, game_session::*, game_state::*, player::*, tile_bag::*, word::*};

mod dictionary;
mod game_session;
mod game_state;
mod player;
mod tile_bag;
mod word;
