use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform mine placement with rejection of already mined cells.
#[derive(Clone, Debug)]
pub struct RandomGridGenerator {
    config: GameConfig,
    rng: SmallRng,
}

impl RandomGridGenerator {
    /// Re-clamps `config`, so unchecked or deserialized values cannot produce an empty board.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = GameConfig::new(config.size, config.mines)
            .with_reveal_mines_on_generate(config.reveal_mines_on_generate);
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn config(&self) -> GameConfig {
        self.config
    }

    fn generate(&mut self) -> Grid {
        let config = self.config;
        let mut grid = Grid::generate_cells(config.size);
        generate_mines(&mut grid, config.mines, &mut self.rng);
        log::debug!(
            "Generated {}x{} grid with {} mines",
            config.size.0,
            config.size.1,
            config.mines
        );
        finish(grid, config.reveal_mines_on_generate)
    }
}

/// Marks `mine_count` distinct cells as mines by sampling positions until an unmined one comes up.
///
/// The count is kept within `[1, area]` so the board always holds a mine and the loop terminates.
pub fn generate_mines<R: Rng + ?Sized>(grid: &mut Grid, mine_count: CellCount, rng: &mut R) {
    let (width, height) = grid.size();
    let total_cells = grid.total_cells();

    let clamped = mine_count.clamp(total_cells.min(1), total_cells);
    if clamped != mine_count {
        log::warn!(
            "Requested {} mines on a {}x{} grid, placing {}",
            mine_count,
            width,
            height,
            clamped
        );
    }
    let mine_count = clamped;

    let mut mines_placed = 0;
    while mines_placed < mine_count {
        let coords = (rng.random_range(0..width), rng.random_range(0..height));
        if grid.place_mine(coords) {
            mines_placed += 1;
        } else {
            log::trace!("Resampling, {:?} already holds a mine", coords);
        }
    }
}
