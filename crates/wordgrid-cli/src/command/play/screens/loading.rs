use std::{
    path::PathBuf,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, HorizontalAlignment},
    text::Text,
    widgets::{Block as BlockWidget, Paragraph},
};
use wordgrid_engine::{Dictionary, GameSession, LoadedDictionary, TileSeed};

use crate::{
    tui::{Runtime, Screen, ScreenTransition},
    view::widgets::style,
};

use super::{PlayScreen, SummarySlot};

const POLL_RATE: f64 = 20.0;

/// Loads the dictionary off the UI thread, then hands over to [`PlayScreen`].
///
/// No game exists until the dictionary is available.
#[derive(Debug)]
pub(crate) struct LoadingScreen {
    path: PathBuf,
    seed: Option<TileSeed>,
    summary: SummarySlot,
    receiver: Receiver<LoadedDictionary>,
}

impl LoadingScreen {
    pub(crate) fn new(path: PathBuf, seed: Option<TileSeed>, summary: SummarySlot) -> Self {
        let (sender, receiver) = mpsc::channel();
        let loader_path = path.clone();
        thread::spawn(move || {
            // the receiver is gone only if the user quit while loading
            let _ = sender.send(Dictionary::load_or_fallback(&loader_path));
        });
        Self {
            path,
            seed,
            summary,
            receiver,
        }
    }

    fn start_game(&self, dictionary: Dictionary, fallback: bool) -> ScreenTransition {
        let session = match self.seed {
            Some(seed) => GameSession::with_seed(dictionary, seed),
            None => GameSession::new(dictionary),
        };
        let screen = PlayScreen::new(session, self.summary.clone(), fallback);
        ScreenTransition::Replace(Box::new(screen))
    }
}

impl Screen for LoadingScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(POLL_RATE));
    }

    fn on_close(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(None);
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        match event.as_key_press_event() {
            Some(key) if key.code == KeyCode::Esc => ScreenTransition::Exit,
            _ => ScreenTransition::Stay,
        }
    }

    fn update(&mut self, _runtime: &mut Runtime) -> ScreenTransition {
        match self.receiver.try_recv() {
            Ok(loaded) => {
                let fallback = loaded.is_fallback();
                self.start_game(loaded.dictionary, fallback)
            }
            Err(TryRecvError::Empty) => ScreenTransition::Stay,
            Err(TryRecvError::Disconnected) => {
                log::error!("dictionary loader stopped without a result");
                self.start_game(Dictionary::fallback(), true)
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let block = BlockWidget::bordered()
            .title("WORDGRID")
            .title_alignment(HorizontalAlignment::Center);
        let viewport = frame
            .area()
            .centered(Constraint::Max(60), Constraint::Length(3));
        let text = Text::from(format!("Loading dictionary {} ...", self.path.display()))
            .style(style::INFO)
            .centered();
        frame.render_widget(Paragraph::new(text).block(block), viewport);
    }
}
