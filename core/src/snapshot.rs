use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned, serializable view of a board for renderers that ship state elsewhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub state: GameState,
    pub mines_left: i64,
    /// Row-major by `x` then `y`, same order as [`Grid::iter`].
    pub cells: Vec<Cell>,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        Self {
            size: board.size(),
            state: board.state(),
            mines_left: board.mines_left(),
            cells: board.grid().iter().copied().collect(),
        }
    }

    pub fn cell(&self, (x, y): Coord2) -> Option<&Cell> {
        if x >= self.size.0 || y >= self.size.1 {
            return None;
        }
        let index = usize::from(x) * usize::from(self.size.1) + usize::from(y);
        self.cells.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_board_copies_every_cell() {
        let mut board = Board::new(Grid::from_mine_coords((3, 2), &[(0, 0)]).unwrap());
        board.toggle_flag((0, 0));
        board.reveal((2, 1));

        let snapshot = Snapshot::from_board(&board);

        assert_eq!(snapshot.size, (3, 2));
        assert_eq!(snapshot.cells.len(), 6);
        assert_eq!(snapshot.mines_left, 0);
        assert_eq!(snapshot.cell((2, 1)).map(|cell| cell.position), Some((2, 1)));
        assert_eq!(snapshot.cell((0, 0)).map(|cell| cell.flagged), Some(true));
        assert_eq!(snapshot.cell((3, 0)), None);
    }

    #[test]
    fn serializes_to_json() {
        let board = Board::new(Grid::from_mine_coords((2, 1), &[(1, 0)]).unwrap());
        let snapshot = Snapshot::from_board(&board);

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: Snapshot = serde_json::from_str(&json).unwrap();

        assert!(json.contains("\"state\":\"Playing\""));
        assert_eq!(decoded, snapshot);
    }
}
