use log::{debug, warn};

use super::{CellState, ModelListener};
use crate::{array::Array2D, dims::Indices};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The shared grid every generator and solver works on.
///
/// All writes go through [`Model::regenerate`] and [`Model::update_model`], which keep the
/// begin/end cells unique and forward every change to the registered listeners.
pub struct Model {
    size: usize,
    matrix: Option<Array2D<CellState>>,
    begin: Option<Indices>,
    end: Option<Indices>,
    listeners: Vec<(ListenerId, Box<dyn ModelListener>)>,
    next_listener: u64,
}

impl Model {
    /// Creates an empty model. Until the first [`Model::regenerate`] there is no matrix
    /// and every update is ignored.
    pub fn new(size: usize) -> Self {
        Model {
            size,
            matrix: None,
            begin: None,
            end: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn begin(&self) -> Option<Indices> {
        self.begin
    }

    pub fn end(&self) -> Option<Indices> {
        self.end
    }

    pub fn matrix(&self) -> Option<&Array2D<CellState>> {
        self.matrix.as_ref()
    }

    pub fn get(&self, pos: Indices) -> Option<CellState> {
        self.matrix.as_ref().and_then(|m| m.get(pos)).copied()
    }

    pub fn is_in_bounds(&self, pos: Indices) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    pub fn add_listener(&mut self, listener: Box<dyn ModelListener>) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> Option<Box<dyn ModelListener>> {
        let idx = self.listeners.iter().position(|(lid, _)| *lid == id)?;
        Some(self.listeners.remove(idx).1)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Replaces the whole matrix and hands every listener its own copy of it.
    ///
    /// Begin and end are taken from the new matrix: the first `Begin`/`End` cell in
    /// row-major order is kept, any further ones are demoted to
    /// [`CellState::UnvisitedCell`], and a missing one clears the stored coordinate.
    /// Listeners get the matrix after that demotion, so their snapshot differs from the
    /// one passed in whenever it held more than one `Begin` or `End`.
    pub fn regenerate(&mut self, mut matrix: Array2D<CellState>) {
        if matrix.width() != self.size || matrix.height() != self.size {
            warn!(
                "Ignoring regenerate with a {}x{} matrix, model size is {}",
                matrix.width(),
                matrix.height(),
                self.size
            );
            return;
        }

        let mut begin = None;
        let mut end = None;
        for pos in Indices::iter_fill(Indices::ZERO, matrix.size()) {
            let slot = match matrix[pos] {
                CellState::Begin => &mut begin,
                CellState::End => &mut end,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(pos);
            } else {
                // listeners see this cell as unvisited, not as passed in
                warn!("Duplicate {} at {:?}, demoting", matrix[pos], pos);
                matrix[pos] = CellState::UnvisitedCell;
            }
        }

        debug!("Regenerated {0}x{0} model", self.size);

        self.begin = begin;
        self.end = end;
        for (_, listener) in self.listeners.iter_mut() {
            listener.on_reset(matrix.clone());
        }
        self.matrix = Some(matrix);
    }

    /// Writes a single cell and notifies listeners.
    ///
    /// Does nothing when there is no matrix yet, when `(x, y)` is out of range, or when
    /// the target currently holds `Begin` or `End`. Assigning `Begin` (or `End`) demotes
    /// the previous holder to [`CellState::UnvisitedCell`]; that demotion is announced
    /// before the new assignment.
    ///
    /// Returns whether the cell was written.
    pub fn update_model(&mut self, x: i32, y: i32, state: CellState) -> bool {
        let pos = Indices::new(x, y);
        let Some(matrix) = self.matrix.as_mut() else {
            return false;
        };
        let Some(cell) = matrix.get_mut(pos) else {
            return false;
        };
        if cell.is_endpoint() {
            return false;
        }

        *cell = state;

        let demoted = match state {
            CellState::Begin => self.begin.replace(pos),
            CellState::End => self.end.replace(pos),
            _ => None,
        };

        if let Some(old) = demoted {
            matrix[old] = CellState::UnvisitedCell;
            Self::notify(&mut self.listeners, old, CellState::UnvisitedCell);
        }
        Self::notify(&mut self.listeners, pos, state);

        true
    }

    /// Resets everything a previous solver run left behind back to unvisited cells.
    pub fn clear_search_marks(&mut self) {
        let Some(matrix) = self.matrix.as_ref() else {
            return;
        };

        let marked = matrix
            .iter_pos()
            .filter(|&pos| matrix[pos].is_search_mark())
            .collect::<Vec<_>>();

        for pos in marked {
            self.update_model(pos.x, pos.y, CellState::UnvisitedCell);
        }
    }

    fn notify(
        listeners: &mut [(ListenerId, Box<dyn ModelListener>)],
        pos: Indices,
        state: CellState,
    ) {
        for (_, listener) in listeners.iter_mut() {
            listener.on_update(pos.x, pos.y, state);
        }
    }
}
