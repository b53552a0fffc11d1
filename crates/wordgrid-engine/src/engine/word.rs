//! Word extraction and validation for a turn's placements.
//!
//! A turn is valid when its placements lie on a single row or column, the
//! cells between the outermost placements are all occupied, and the letters
//! across that span spell a dictionary word.
//!
//! The span covers only the cells from the lowest to the highest placed
//! coordinate. Letters already on the board between placements are part of
//! the word and its score; letters touching the span from outside are not.

use serde::Serialize;

use crate::{Board, Dictionary, Letter, Position};

/// A tile put on the board during the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub letter: Letter,
    pub position: Position,
}

impl Placement {
    #[must_use]
    pub const fn new(letter: Letter, position: Position) -> Self {
        Self { letter, position }
    }
}

/// Direction in which a word is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

/// A word read off the board, with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedWord {
    word: String,
    score: u32,
    start: Position,
    orientation: Orientation,
}

impl PlayedWord {
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Position of the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    #[display("no tiles placed")]
    EmptyPlacement,
    #[display("tiles must be in a straight line")]
    NonLinearPlacement,
    #[display("gaps in word")]
    GapInWord,
    #[display("\"{word}\" is not a valid word")]
    UnknownWord {
        #[error(not(source))]
        word: String,
    },
}

/// Reads the word formed by `placements` off `board` and scores it.
///
/// Placements sharing a single row are read horizontally, which includes the
/// single-tile case; otherwise placements sharing a single column are read
/// vertically. The dictionary is not consulted, see [`validate_word`].
pub fn extract_word(board: &Board, placements: &[Placement]) -> Result<PlayedWord, WordError> {
    let Some(first) = placements.first() else {
        return Err(WordError::EmptyPlacement);
    };

    let (orientation, line) = if placements
        .iter()
        .all(|p| p.position.row() == first.position.row())
    {
        (Orientation::Horizontal, first.position.row())
    } else if placements
        .iter()
        .all(|p| p.position.col() == first.position.col())
    {
        (Orientation::Vertical, first.position.col())
    } else {
        return Err(WordError::NonLinearPlacement);
    };

    let along = |pos: Position| match orientation {
        Orientation::Horizontal => pos.col(),
        Orientation::Vertical => pos.row(),
    };
    let origin = along(first.position);
    let (lo, hi) = placements
        .iter()
        .map(|p| along(p.position))
        .fold((origin, origin), |(lo, hi), i| (lo.min(i), hi.max(i)));

    let mut word = String::with_capacity(hi - lo + 1);
    let mut score = 0;
    let mut start = None;
    for i in lo..=hi {
        let pos = match orientation {
            Orientation::Horizontal => Position::new(line, i),
            Orientation::Vertical => Position::new(i, line),
        };
        let Some((pos, letter)) = pos.and_then(|pos| Some((pos, board.get(pos)?))) else {
            return Err(WordError::GapInWord);
        };
        start.get_or_insert(pos);
        word.push(letter.as_char());
        score += letter.value();
    }

    Ok(PlayedWord {
        word,
        score,
        start: start.unwrap_or(first.position),
        orientation,
    })
}

/// Like [`extract_word`], but also requires the word to be in `dictionary`.
pub fn validate_word(
    board: &Board,
    placements: &[Placement],
    dictionary: &Dictionary,
) -> Result<PlayedWord, WordError> {
    let played = extract_word(board, placements)?;
    if !dictionary.contains(&played.word) {
        return Err(WordError::UnknownWord { word: played.word });
    }
    Ok(played)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    /// Places `(letter, row, col)` triples on `board` and returns the placements.
    fn place(board: &mut Board, tiles: &[(char, usize, usize)]) -> Vec<Placement> {
        tiles
            .iter()
            .map(|&(c, row, col)| {
                let placement = Placement::new(letter(c), pos(row, col));
                board.try_set(placement.position, placement.letter).unwrap();
                placement
            })
            .collect()
    }

    #[test]
    fn test_empty_placement() {
        assert_eq!(
            extract_word(&Board::EMPTY, &[]),
            Err(WordError::EmptyPlacement)
        );
    }

    #[test]
    fn test_horizontal_word() {
        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('H', 7, 7), ('A', 7, 8), ('T', 7, 9)]);

        let played = extract_word(&board, &placements).unwrap();
        assert_eq!(played.word(), "HAT");
        assert_eq!(played.score(), 6);
        assert_eq!(played.start(), pos(7, 7));
        assert!(played.orientation().is_horizontal());
    }

    #[test]
    fn test_placement_order_does_not_matter() {
        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('T', 2, 9), ('H', 2, 7), ('A', 2, 8)]);

        let played = extract_word(&board, &placements).unwrap();
        assert_eq!(played.word(), "HAT");
        assert_eq!(played.start(), pos(2, 7));
    }

    #[test]
    fn test_vertical_word() {
        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('D', 4, 0), ('O', 5, 0), ('G', 6, 0)]);

        let played = extract_word(&board, &placements).unwrap();
        assert_eq!(played.word(), "DOG");
        assert_eq!(played.score(), 5);
        assert!(played.orientation().is_vertical());
    }

    #[test]
    fn test_single_tile_is_horizontal() {
        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('Q', 0, 14)]);

        let played = extract_word(&board, &placements).unwrap();
        assert_eq!(played.word(), "Q");
        assert_eq!(played.score(), 10);
        assert!(played.orientation().is_horizontal());
    }

    #[test]
    fn test_non_linear_placement() {
        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('C', 3, 3), ('A', 3, 4), ('T', 4, 5)]);
        assert_eq!(
            extract_word(&board, &placements),
            Err(WordError::NonLinearPlacement)
        );

        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('C', 0, 0), ('A', 1, 1)]);
        assert_eq!(
            extract_word(&board, &placements),
            Err(WordError::NonLinearPlacement)
        );
    }

    #[test]
    fn test_gap_in_word() {
        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('C', 3, 3), ('T', 3, 5)]);
        assert_eq!(extract_word(&board, &placements), Err(WordError::GapInWord));

        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('C', 0, 3), ('A', 1, 3), ('T', 9, 3)]);
        assert_eq!(extract_word(&board, &placements), Err(WordError::GapInWord));
    }

    #[test]
    fn test_existing_letters_inside_span_are_included() {
        let mut board = Board::EMPTY;
        // Earlier turn left an 'O' in the middle
        place(&mut board, &[('O', 5, 6)]);
        let placements = place(&mut board, &[('F', 5, 4), ('R', 5, 5), ('G', 5, 7)]);

        let played = extract_word(&board, &placements).unwrap();
        assert_eq!(played.word(), "FROG");
        // F(4) + R(1) + O(1) + G(2), including the pre-existing O
        assert_eq!(played.score(), 8);
    }

    #[test]
    fn test_letters_outside_span_are_ignored() {
        let mut board = Board::EMPTY;
        place(&mut board, &[('S', 8, 10), ('X', 8, 6)]);
        let placements = place(&mut board, &[('C', 8, 7), ('A', 8, 8), ('T', 8, 9)]);

        let played = extract_word(&board, &placements).unwrap();
        assert_eq!(played.word(), "CAT");
        assert_eq!(played.score(), 5);
    }

    #[test]
    fn test_word_matches_board_for_every_row_and_column() {
        for line in 0..Board::SIZE {
            for start in 0..=Board::SIZE - 4 {
                let mut board = Board::EMPTY;
                let tiles: Vec<_> = "GAME"
                    .chars()
                    .enumerate()
                    .map(|(i, c)| (c, line, start + i))
                    .collect();
                let placements = place(&mut board, &tiles);
                let played = extract_word(&board, &placements).unwrap();
                assert_eq!(played.word(), "GAME");
                assert_eq!(played.score(), 7);

                let mut board = Board::EMPTY;
                let tiles: Vec<_> = "GAME"
                    .chars()
                    .enumerate()
                    .map(|(i, c)| (c, start + i, line))
                    .collect();
                let placements = place(&mut board, &tiles);
                let played = extract_word(&board, &placements).unwrap();
                assert_eq!(played.word(), "GAME");
                assert!(played.orientation().is_vertical());
            }
        }
    }

    #[test]
    fn test_validate_word_checks_dictionary() {
        let dictionary = Dictionary::from_words(["hat"]);

        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('H', 7, 7), ('A', 7, 8), ('T', 7, 9)]);
        let played = validate_word(&board, &placements, &dictionary).unwrap();
        assert_eq!(played.word(), "HAT");

        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('T', 7, 7), ('A', 7, 8), ('H', 7, 9)]);
        let err = validate_word(&board, &placements, &dictionary).unwrap_err();
        assert_eq!(
            err,
            WordError::UnknownWord {
                word: "TAH".to_owned()
            }
        );
        assert_eq!(err.to_string(), "\"TAH\" is not a valid word");
    }

    #[test]
    fn test_validate_word_reports_structure_errors_first() {
        let dictionary = Dictionary::fallback();
        let mut board = Board::EMPTY;
        let placements = place(&mut board, &[('C', 3, 3), ('T', 3, 5)]);
        assert_eq!(
            validate_word(&board, &placements, &dictionary),
            Err(WordError::GapInWord)
        );
    }
}
