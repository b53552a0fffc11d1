use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{board_display::*, key_binding_display::*, rack_display::*, scoreboard_display::*};

mod board_display;
mod key_binding_display;
mod rack_display;
mod scoreboard_display;

mod color {
    use ratatui::style::Color;

    pub const AMBER: Color = Color::Rgb(255, 191, 0);
    pub const CREAM: Color = Color::Rgb(245, 235, 200);
    pub const GREEN: Color = Color::Rgb(0, 200, 0);
    pub const RED: Color = Color::Rgb(230, 50, 50);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_CELL: Style = fg_bg(color::GRAY, color::BLACK);
    pub const TILE: Style = fg_bg(color::BLACK, color::CREAM);
    pub const PLACED_TILE: Style = fg_bg(color::BLACK, color::AMBER);
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
    pub const CENTER: Style = fg_bg(color::AMBER, color::BLACK);
    pub const VALUE: Style = fg_bg(color::GRAY, color::BLACK);

    pub const INFO: Style = fg_bg(color::WHITE, color::BLACK);
    pub const SUCCESS: Style = fg_bg(color::GREEN, color::BLACK);
    pub const ERROR: Style = fg_bg(color::RED, color::BLACK);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
