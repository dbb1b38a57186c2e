use colored::{ColoredString, Colorize as _};

use crate::{
    array::Array2D,
    dims::Indices,
    gameboard::{CellState, ModelListener},
};

/// Mirrors the model from its notifications and draws it as text.
#[derive(Debug, Default)]
pub struct TerminalView {
    grid: Option<Array2D<CellState>>,
    resets: usize,
    updates: usize,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> Option<&Array2D<CellState>> {
        self.grid.as_ref()
    }

    pub fn resets(&self) -> usize {
        self.resets
    }

    pub fn updates(&self) -> usize {
        self.updates
    }

    fn glyph(state: CellState) -> &'static str {
        match state {
            CellState::Wall => "██",
            CellState::UnvisitedCell => "  ",
            CellState::VisitedCell => "··",
            CellState::FrontierCell => "░░",
            CellState::Begin => "S ",
            CellState::End => "E ",
            CellState::Path => "••",
        }
    }

    fn styled(state: CellState) -> ColoredString {
        let glyph = Self::glyph(state);
        match state {
            CellState::Wall => glyph.white(),
            CellState::UnvisitedCell => glyph.normal(),
            CellState::VisitedCell => glyph.dimmed(),
            CellState::FrontierCell => glyph.cyan(),
            CellState::Begin => glyph.green().bold(),
            CellState::End => glyph.red().bold(),
            CellState::Path => glyph.yellow(),
        }
    }

    /// Draws the mirrored grid, one text line per row. Empty before the first reset.
    pub fn render(&self, color: bool) -> String {
        let Some(grid) = &self.grid else {
            return String::new();
        };

        let mut out = String::with_capacity(grid.len() * 2 + grid.height());
        for row in grid.rows() {
            for &state in row {
                if color {
                    out.push_str(&Self::styled(state).to_string());
                } else {
                    out.push_str(Self::glyph(state));
                }
            }
            out.push('\n');
        }
        out
    }
}

impl ModelListener for TerminalView {
    fn on_reset(&mut self, snapshot: Array2D<CellState>) {
        self.resets += 1;
        self.grid = Some(snapshot);
    }

    fn on_update(&mut self, x: i32, y: i32, state: CellState) {
        self.updates += 1;
        if let Some(cell) = self.grid.as_mut().and_then(|g| g.get_mut(Indices::new(x, y))) {
            *cell = state;
        }
    }
}
