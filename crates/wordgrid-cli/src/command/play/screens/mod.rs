use std::{cell::RefCell, rc::Rc};

use wordgrid_engine::GameSummary;

pub(crate) use self::{loading::LoadingScreen, play::PlayScreen};

mod loading;
mod play;

/// Receives the end-of-game summary when the play screen closes.
pub(crate) type SummarySlot = Rc<RefCell<Option<GameSummary>>>;
