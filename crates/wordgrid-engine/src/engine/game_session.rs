use serde::Serialize;

use crate::{
    PlaceError, SubmitError,
    core::{
        board::{Board, Position},
        letter::Letter,
    },
};

use super::{
    dictionary::Dictionary,
    game_state::GameState,
    player::{Player, PlayerId},
    tile_bag::{TileBag, TileSeed},
    word::{self, PlayedWord},
};

/// Where the game is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum TurnState {
    /// The player may place tiles and submit.
    AwaitingPlacement(PlayerId),
    /// No further placements or submissions are accepted.
    GameOver(GameResult),
}

/// Final standing once the game is over.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant,
)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameResult {
    #[display("{winner} wins with {score} points!")]
    Win { winner: PlayerId, score: u32 },
    #[display("Draw at {score} points each!")]
    Draw { score: u32 },
}

impl GameResult {
    /// The player with the strictly higher score wins; equal scores draw.
    #[must_use]
    pub fn from_scores(player_one: u32, player_two: u32) -> Self {
        match player_one.cmp(&player_two) {
            std::cmp::Ordering::Greater => Self::Win {
                winner: PlayerId::One,
                score: player_one,
            },
            std::cmp::Ordering::Less => Self::Win {
                winner: PlayerId::Two,
                score: player_two,
            },
            std::cmp::Ordering::Equal => Self::Draw { score: player_one },
        }
    }
}

/// A successfully scored turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredTurn {
    pub player: PlayerId,
    pub word: String,
    pub score: u32,
}

/// What a successful [`GameSession::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The player who scored.
    pub player: PlayerId,
    pub played: PlayedWord,
    /// Set when this turn ended the game.
    pub result: Option<GameResult>,
}

/// End-of-game report, serializable for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub seed: TileSeed,
    pub scores: [u32; 2],
    pub result: Option<GameResult>,
    pub turns: Vec<ScoredTurn>,
}

/// A two-player game with its dictionary, driven turn by turn.
///
/// The session owns the turn cycle:
///
/// 1. The current player places tiles with [`place`](Self::place)
/// 2. [`submit`](Self::submit) validates the turn's placements
/// 3. On success the score is committed, the rack is refilled and the turn
///    passes to the other player; on failure nothing but the error changes
///    and the placed tiles stay on the board
/// 4. After a successful turn, the game ends once the bag is empty and
///    either rack is empty
///
/// A session can only be built from a loaded [`Dictionary`], so no tile can
/// be placed before the word list is available.
///
/// # Example
///
/// ```
/// use wordgrid_engine::{Dictionary, GameSession, PlayerId};
///
/// let session = GameSession::new(Dictionary::fallback());
/// assert_eq!(session.current_player(), Some(PlayerId::One));
/// assert_eq!(session.player(PlayerId::One).rack().len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    dictionary: Dictionary,
    turn_state: TurnState,
    history: Vec<ScoredTurn>,
}

impl GameSession {
    /// Starts a game with a randomly seeded tile bag.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self::from_state(dictionary, GameState::new(TileBag::new()))
    }

    /// Starts a game whose tile draws are determined by `seed`.
    #[must_use]
    pub fn with_seed(dictionary: Dictionary, seed: TileSeed) -> Self {
        Self::from_state(dictionary, GameState::new(TileBag::with_seed(seed)))
    }

    /// Resumes play from an arbitrary state with player one to move.
    #[must_use]
    pub fn from_state(dictionary: Dictionary, state: GameState) -> Self {
        log::info!(
            "new game: seed {}, {} tiles in bag, {} dictionary words",
            state.bag().seed(),
            state.bag().len(),
            dictionary.len()
        );
        let mut this = Self {
            state,
            dictionary,
            turn_state: TurnState::AwaitingPlacement(PlayerId::One),
            history: vec![],
        };
        this.check_game_over();
        this
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn bag(&self) -> &TileBag {
        self.state.bag()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.state.player(id)
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.turn_state {
            TurnState::AwaitingPlacement(id) => Some(id),
            TurnState::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.turn_state {
            TurnState::AwaitingPlacement(_) => None,
            TurnState::GameOver(result) => Some(result),
        }
    }

    /// Scored turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ScoredTurn] {
        &self.history
    }

    /// Places `letter` from the current player's rack at `pos`.
    pub fn place(&mut self, pos: Position, letter: Letter) -> Result<(), PlaceError> {
        let id = self.current_player().ok_or(PlaceError::GameOver)?;
        self.state.place(id, pos, letter)?;
        log::debug!("{id} placed {letter} at ({}, {})", pos.row(), pos.col());
        Ok(())
    }

    /// Validates and scores the current player's placements.
    pub fn submit(&mut self) -> Result<TurnOutcome, SubmitError> {
        let id = self.current_player().ok_or(SubmitError::GameOver)?;
        let mover = self.state.player(id);
        let played = word::validate_word(self.state.board(), mover.placed(), &self.dictionary)
            .inspect_err(|err| log::info!("{id} submission rejected: {err}"))
            .map_err(SubmitError::Word)?;

        self.state.player_mut(id).commit_turn(played.score());
        self.state.draw(id);
        self.history.push(ScoredTurn {
            player: id,
            word: played.word().to_owned(),
            score: played.score(),
        });
        log::info!(
            "{id} played {:?} for {} points (total {})",
            played.word(),
            played.score(),
            self.state.player(id).score()
        );

        self.turn_state = TurnState::AwaitingPlacement(id.other());
        let result = self.check_game_over();
        Ok(TurnOutcome {
            player: id,
            played,
            result,
        })
    }

    fn check_game_over(&mut self) -> Option<GameResult> {
        if !self.state.is_exhausted() {
            return None;
        }
        let result = GameResult::from_scores(
            self.state.player(PlayerId::One).score(),
            self.state.player(PlayerId::Two).score(),
        );
        log::info!("game over: {result}");
        self.turn_state = TurnState::GameOver(result);
        Some(result)
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            seed: self.state.bag().seed(),
            scores: PlayerId::ALL.map(|id| self.state.player(id).score()),
            result: self.result(),
            turns: self.history.clone(),
        }
    }
}
