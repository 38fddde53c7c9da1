use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of freshly populated grids, consulted once per new game.
pub trait GridGenerator {
    fn config(&self) -> GameConfig;

    fn generate(&mut self) -> Grid;
}

/// Shared tail of every generator: numbers first, then the optional mine reveal.
fn finish(mut grid: Grid, reveal_mines: bool) -> Grid {
    grid.generate_numbers();
    if reveal_mines {
        grid.reveal_mines();
    }
    grid
}
