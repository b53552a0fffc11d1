use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use wordgrid_engine::{RACK_SIZE, Rack};

use crate::view::widgets::style;

const SLOT_WIDTH: u16 = 4;
#[allow(clippy::cast_possible_truncation)]
const SLOTS: u16 = RACK_SIZE as u16;

/// A player's tiles with their point values underneath.
#[derive(Debug)]
pub struct RackDisplay<'a> {
    rack: &'a Rack,
    block: Option<BlockWidget<'a>>,
}

impl<'a> RackDisplay<'a> {
    pub fn new(rack: &'a Rack) -> Self {
        Self { rack, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        SLOTS * SLOT_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for RackDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut letters = vec![];
        let mut values = vec![];
        for slot in 0..RACK_SIZE {
            if let Some(letter) = self.rack.tiles().get(slot) {
                let value = format!("{:^3}", letter.value());
                letters.push(Span::styled(format!(" {letter} "), style::TILE));
                values.push(Span::styled(value, style::VALUE));
            } else {
                letters.push(Span::styled(" · ", style::EMPTY_CELL));
                values.push(Span::styled("   ", style::VALUE));
            }
            letters.push(Span::from(" "));
            values.push(Span::from(" "));
        }

        let rows = Layout::vertical([Constraint::Length(1); 2]);
        let [letters_area, values_area] = area.layout(&rows);
        Line::from(letters).centered().render(letters_area, buf);
        Line::from(values).centered().render(values_area, buf);
    }
}
