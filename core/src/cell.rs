use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Classification of a grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Result of an out-of-bounds lookup, never stored in a grid.
    Invalid,
    Empty,
    Mine,
    Number,
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Invalid
    }
}

/// One grid square together with its player-visible state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub position: Coord2,
    pub kind: CellKind,
    /// Adjacent mine count, only meaningful for [`CellKind::Number`].
    pub number: u8,
    pub revealed: bool,
    pub flagged: bool,
    /// Set only on the mine that ended the game.
    pub exploded: bool,
}

impl Cell {
    pub const INVALID: Cell = Cell {
        position: (0, 0),
        kind: CellKind::Invalid,
        number: 0,
        revealed: false,
        flagged: false,
        exploded: false,
    };

    pub const fn empty(position: Coord2) -> Self {
        Self {
            position,
            kind: CellKind::Empty,
            ..Self::INVALID
        }
    }

    pub const fn is_invalid(&self) -> bool {
        matches!(self.kind, CellKind::Invalid)
    }

    pub const fn is_mine(&self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Whether a reveal or flag action may touch this cell at all.
    pub const fn is_interactive(&self) -> bool {
        !self.is_invalid() && !self.revealed
    }
}
