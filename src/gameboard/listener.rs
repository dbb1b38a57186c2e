use std::{cell::RefCell, rc::Rc};

use crate::{array::Array2D, dims::Indices};

use super::CellState;

/// Observer of a [`Model`](super::Model).
///
/// Calls are synchronous: the model does not return from a mutation until every listener
/// has been notified.
pub trait ModelListener {
    /// The whole matrix was replaced. The snapshot is owned by the listener and shares no
    /// storage with the model.
    fn on_reset(&mut self, snapshot: Array2D<CellState>);

    fn on_update(&mut self, x: i32, y: i32, state: CellState);
}

/// Lets the caller keep a handle to a listener after handing it to the model.
impl<L: ModelListener + ?Sized> ModelListener for Rc<RefCell<L>> {
    fn on_reset(&mut self, snapshot: Array2D<CellState>) {
        self.borrow_mut().on_reset(snapshot);
    }

    fn on_update(&mut self, x: i32, y: i32, state: CellState) {
        self.borrow_mut().on_update(x, y, state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    Reset(Array2D<CellState>),
    Update(Indices, CellState),
}

impl ModelEvent {
    pub fn as_update(&self) -> Option<(Indices, CellState)> {
        match self {
            ModelEvent::Update(pos, state) => Some((*pos, *state)),
            ModelEvent::Reset(_) => None,
        }
    }
}

/// Records every notification in order. Useful for replaying a run step by step.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<ModelEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn events(&self) -> &[ModelEvent] {
        &self.events
    }

    pub fn updates(&self) -> impl Iterator<Item = (Indices, CellState)> + '_ {
        self.events.iter().filter_map(ModelEvent::as_update)
    }

    pub fn resets(&self) -> impl Iterator<Item = &Array2D<CellState>> + '_ {
        self.events.iter().filter_map(|e| match e {
            ModelEvent::Reset(snapshot) => Some(snapshot),
            ModelEvent::Update(..) => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ModelListener for EventLog {
    fn on_reset(&mut self, snapshot: Array2D<CellState>) {
        self.events.push(ModelEvent::Reset(snapshot));
    }

    fn on_update(&mut self, x: i32, y: i32, state: CellState) {
        self.events.push(ModelEvent::Update(Indices::new(x, y), state));
    }
}
