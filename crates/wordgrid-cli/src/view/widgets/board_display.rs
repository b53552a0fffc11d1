use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Span,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use wordgrid_engine::{Board, Placement, Position};

use crate::view::widgets::style;

const CELL_WIDTH: u16 = 3;
#[allow(clippy::cast_possible_truncation)]
const GRID_LEN: u16 = Board::SIZE as u16;

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    placed: &'a [Placement],
    cursor: Option<Position>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            placed: &[],
            cursor: None,
            block: None,
        }
    }

    /// Highlights tiles placed in the turn in progress.
    pub fn placed(self, placed: &'a [Placement]) -> Self {
        Self { placed, ..self }
    }

    pub fn cursor(self, cursor: Position) -> Self {
        Self {
            cursor: Some(cursor),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        GRID_LEN * CELL_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        GRID_LEN + super::block_vertical_margin(self.block.as_ref())
    }

    fn cell(&self, pos: Position) -> Span<'static> {
        let (text, cell_style) = match self.board.get(pos) {
            Some(letter) if self.placed.iter().any(|p| p.position == pos) => {
                (format!(" {letter} "), style::PLACED_TILE)
            }
            Some(letter) => (format!(" {letter} "), style::TILE),
            None if pos == Position::CENTER => (" * ".to_owned(), style::CENTER),
            None => (" · ".to_owned(), style::EMPTY_CELL),
        };
        if self.cursor == Some(pos) {
            Span::styled(text, cell_style.patch(style::CURSOR))
        } else {
            Span::styled(text, cell_style)
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..Board::SIZE).map(|_| Constraint::Length(CELL_WIDTH));
        let row_constraints = (0..Board::SIZE).map(|_| Constraint::Length(1));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<{ Board::SIZE }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Board::SIZE }>(&horizontal));

        for (row, grid_row) in grid_cells.enumerate() {
            for (col, grid_cell) in iter::zip(0.., grid_row) {
                if let Some(pos) = Position::new(row, col) {
                    self.cell(pos).render(grid_cell, buf);
                }
            }
        }
    }
}
