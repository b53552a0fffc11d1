pub use self::{board::*, letter::*, rack::*};

pub(crate) mod board;
pub(crate) mod letter;
pub(crate) mod rack;
