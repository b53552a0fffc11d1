use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use wordgrid_engine::{GameSession, PlayerId};

use crate::view::widgets::style;

/// Scores, turn, remaining tiles and the last scored word.
pub struct ScoreboardDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreboardDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        ROWS_LEN + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&GameSession) -> String),
    LabelValue(&'static str, &'static dyn Fn(&GameSession) -> String),
}

const ROWS: &[Row] = &[
    Row::FullLabel("PLAYER 1:"),
    Row::FullValue(&|session| session.player(PlayerId::One).score().to_string()),
    Row::FullLabel("PLAYER 2:"),
    Row::FullValue(&|session| session.player(PlayerId::Two).score().to_string()),
    Row::Empty,
    Row::LabelValue("TURN:", &|session| match session.current_player() {
        Some(id) => format!("P{}", id.index() + 1),
        None => "-".to_owned(),
    }),
    Row::LabelValue("BAG:", &|session| session.bag().len().to_string()),
    Row::Empty,
    Row::FullLabel("LAST:"),
    Row::FullValue(&|session| match session.history().last() {
        Some(turn) => format!("P{} {} +{}", turn.player.index() + 1, turn.word, turn.score),
        None => "-".to_owned(),
    }),
];

#[allow(clippy::cast_possible_truncation)]
const ROWS_LEN: u16 = ROWS.len() as u16;

impl Widget for ScoreboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.session), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.session), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
