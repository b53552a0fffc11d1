use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use super::Runtime;

/// One full-terminal view of the application.
///
/// # Lifecycle
///
/// 1. **[`on_active`]** - the screen becomes the foreground screen
/// 2. **Active** - the screen handles events, ticks and draws
/// 3. **[`on_close`]** - the screen is replaced or the application exits
///
/// Screens configure the [`Runtime`] (tick rate) in [`on_active`].
///
/// [`on_active`]: Self::on_active
/// [`on_close`]: Self::on_close
pub trait Screen: fmt::Debug {
    fn on_active(&mut self, runtime: &mut Runtime);

    fn on_close(&mut self, runtime: &mut Runtime);

    /// Handles a terminal event.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> ScreenTransition;

    /// Called on each tick, if the screen enabled ticking.
    fn update(&mut self, runtime: &mut Runtime) -> ScreenTransition;

    fn draw(&self, frame: &mut Frame);
}

/// What the stack does after a screen handled an event or tick.
#[derive(Debug, derive_more::IsVariant)]
pub enum ScreenTransition {
    Stay,
    /// Close the current screen and activate the given one in its place.
    Replace(Box<dyn Screen>),
    /// Close every screen and end the run.
    Exit,
}

/// Stack of screens; only the top screen receives events and is drawn.
#[derive(Debug)]
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
    should_exit: bool,
}

impl ScreenStack {
    #[must_use]
    pub fn new(initial: Box<dyn Screen>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    pub fn init(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active(runtime);
        }
    }

    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    pub fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(runtime, event);
            self.apply_transition(runtime, transition);
        }
    }

    pub fn update(&mut self, runtime: &mut Runtime) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.update(runtime);
            self.apply_transition(runtime, transition);
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        if let Some(current) = self.screens.last() {
            current.draw(frame);
        }
    }

    fn apply_transition(&mut self, runtime: &mut Runtime, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::Replace(mut new_screen) => {
                if let Some(mut old_screen) = self.screens.pop() {
                    old_screen.on_close(runtime);
                }
                new_screen.on_active(runtime);
                self.screens.push(new_screen);
            }
            ScreenTransition::Exit => {
                while let Some(mut screen) = self.screens.pop() {
                    screen.on_close(runtime);
                }
                self.should_exit = true;
            }
        }
    }
}
