use alloc::vec::Vec;

use super::*;

/// Replays a predetermined mine layout on every new game.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedGridGenerator {
    layout: Grid,
    reveal_mines_on_generate: bool,
}

impl FixedGridGenerator {
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        Ok(Self {
            layout: Grid::from_mine_coords(size, mine_coords)?,
            reveal_mines_on_generate: false,
        })
    }

    pub fn with_reveal_mines_on_generate(mut self, reveal: bool) -> Self {
        self.reveal_mines_on_generate = reveal;
        self
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.layout
            .iter()
            .filter(|cell| cell.is_mine())
            .map(|cell| cell.position)
            .collect()
    }
}

impl GridGenerator for FixedGridGenerator {
    fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.layout.size(), self.layout.mine_count())
            .with_reveal_mines_on_generate(self.reveal_mines_on_generate)
    }

    fn generate(&mut self) -> Grid {
        let mut grid = Grid::generate_cells(self.layout.size());
        for coords in self.mine_coords() {
            grid.place_mine(coords);
        }
        finish(grid, self.reveal_mines_on_generate)
    }
}
