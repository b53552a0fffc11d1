use std::{io, time::Duration};

use super::{ScreenStack, event::TuiEvent, event_loop::EventLoop};

/// Terminal runtime driving a [`ScreenStack`].
#[derive(Debug, Default)]
pub struct Runtime {
    pub(super) events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate (ticks per second). `None` stops ticking.
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.events
            .set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    /// Takes over the terminal and runs `screens` until they exit.
    ///
    /// - `Tick`: calls [`ScreenStack::update`]
    /// - `Render`: calls [`ScreenStack::draw`]
    /// - `Crossterm`: calls [`ScreenStack::handle_event`]
    ///
    /// The terminal is restored before returning, also on error.
    pub fn run(mut self, screens: &mut ScreenStack) -> io::Result<()> {
        screens.init(&mut self);

        ratatui::run(|terminal| {
            while !screens.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => screens.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|f| screens.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => screens.handle_event(&mut self, &event),
                }
            }
            Ok(())
        })
    }
}
