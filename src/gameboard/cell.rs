use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label held by a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Wall,
    UnvisitedCell,
    VisitedCell,
    FrontierCell,
    Begin,
    End,
    Path,
}

impl CellState {
    pub const ALL: [CellState; 7] = [
        CellState::Wall,
        CellState::UnvisitedCell,
        CellState::VisitedCell,
        CellState::FrontierCell,
        CellState::Begin,
        CellState::End,
        CellState::Path,
    ];

    const PREFIX: &'static str = "maze-";

    /// External name, as used by views to style a cell.
    pub fn name(self) -> &'static str {
        match self {
            CellState::Wall => "maze-wall",
            CellState::UnvisitedCell => "maze-unvisited-cell",
            CellState::VisitedCell => "maze-visited-cell",
            CellState::FrontierCell => "maze-frontier-cell",
            CellState::Begin => "maze-begin",
            CellState::End => "maze-end",
            CellState::Path => "maze-path",
        }
    }

    /// Everything except walls can be walked through by a solver.
    pub fn is_passable(self) -> bool {
        !matches!(self, CellState::Wall)
    }

    pub fn is_endpoint(self) -> bool {
        matches!(self, CellState::Begin | CellState::End)
    }

    /// States left behind by a solver run.
    pub fn is_search_mark(self) -> bool {
        matches!(
            self,
            CellState::VisitedCell | CellState::FrontierCell | CellState::Path
        )
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::UnvisitedCell
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cell state: {0:?}")]
pub struct ParseStateError(pub String);

impl FromStr for CellState {
    type Err = ParseStateError;

    /// Accepts the external name with or without the `maze-` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix(Self::PREFIX).unwrap_or(trimmed);

        Self::ALL
            .into_iter()
            .find(|state| &state.name()[Self::PREFIX.len()..] == bare)
            .ok_or_else(|| ParseStateError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for state in CellState::ALL {
            assert_eq!(state.name().parse::<CellState>(), Ok(state));
        }
    }

    #[test]
    fn prefix_is_optional() {
        assert_eq!("wall".parse::<CellState>(), Ok(CellState::Wall));
        assert_eq!("frontier-cell".parse(), Ok(CellState::FrontierCell));
        assert_eq!(" maze-end ".parse(), Ok(CellState::End));
    }

    #[test]
    fn unknown_name() {
        let err = "maze-lava".parse::<CellState>().unwrap_err();
        assert_eq!(err, ParseStateError("maze-lava".into()));
        assert!("".parse::<CellState>().is_err());
    }

    #[test]
    fn only_walls_block() {
        for state in CellState::ALL {
            assert_eq!(state.is_passable(), state != CellState::Wall);
        }
    }
}
