pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    #[display("{_0}")]
    CellOccupied(CellOccupiedError),
    #[display("letter {_0} is not in the rack")]
    LetterNotInRack(#[error(not(source))] Letter),
    #[display("game is over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SubmitError {
    #[display("{_0}")]
    Word(WordError),
    #[display("game is over")]
    GameOver,
}
