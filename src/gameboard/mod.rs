pub mod cell;
pub use cell::{CellState, ParseStateError};
pub mod listener;
pub use listener::{EventLog, ModelEvent, ModelListener};
pub mod model;
pub use model::{ListenerId, Model};

pub mod algorithms;
