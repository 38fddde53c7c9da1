use alloc::collections::{BTreeSet, VecDeque};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Won,
    Lost,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    GameOver(GameResult),
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver(_))
    }

    pub const fn result(self) -> Option<GameResult> {
        match self {
            Self::Playing => None,
            Self::GameOver(result) => Some(result),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A single round: the populated grid plus whether the round is still being played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    state: GameState,
}

impl Board {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.grid.mine_count()
    }

    /// Mines minus placed flags, negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.total_mines()) - i64::from(self.grid.flagged_count())
    }

    pub fn cell_at(&self, point: Point) -> Cell {
        self.grid.cell_at(point)
    }

    pub fn exploded_at(&self) -> Option<Coord2> {
        self.grid
            .iter()
            .find(|cell| cell.exploded)
            .map(|cell| cell.position)
    }

    pub fn reveal(&mut self, point: Point) -> RevealOutcome {
        if self.state.is_game_over() {
            log::trace!("Ignoring reveal at {:?}, game is over", point);
            return RevealOutcome::NoChange;
        }

        let cell = self.grid.cell_at(point);
        if !cell.is_interactive() || cell.flagged {
            log::trace!("Ignoring reveal at {:?}: {:?}", point, cell);
            return RevealOutcome::NoChange;
        }

        let coords = cell.position;
        match cell.kind {
            CellKind::Invalid => RevealOutcome::NoChange,
            CellKind::Mine => {
                self.explode(coords);
                RevealOutcome::HitMine
            }
            CellKind::Empty => {
                let opened = self.flood(coords);
                log::debug!("Flood from {:?} revealed {} cells", coords, opened);
                self.check_win_condition()
            }
            CellKind::Number => {
                self.grid[coords].revealed = true;
                log::debug!("Revealed {:?}, adjacent mines: {}", coords, cell.number);
                self.check_win_condition()
            }
        }
    }

    pub fn toggle_flag(&mut self, point: Point) -> MarkOutcome {
        if self.state.is_game_over() {
            log::trace!("Ignoring flag at {:?}, game is over", point);
            return MarkOutcome::NoChange;
        }

        let Some(coords) = self.grid.contains(point) else {
            return MarkOutcome::NoChange;
        };

        let cell = &mut self.grid[coords];
        if cell.revealed {
            return MarkOutcome::NoChange;
        }
        cell.flagged = !cell.flagged;
        MarkOutcome::Changed
    }

    /// Reveals the connected empty region around `start` and its numbered border.
    ///
    /// Work-list traversal, each cell is queued at most once.
    fn flood(&mut self, start: Coord2) -> CellCount {
        let mut visited = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);
        let mut opened = 0;

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.grid[coords];
            if cell.revealed || cell.is_mine() {
                continue;
            }

            cell.revealed = true;
            cell.flagged = false;
            opened += 1;

            // numbered cells form the border and stop the flood
            if cell.kind != CellKind::Empty {
                continue;
            }

            for neighbor in self.grid.iter_neighbors(coords) {
                let next = &self.grid[neighbor];
                if !next.revealed && !next.is_mine() && visited.insert(neighbor) {
                    to_visit.push_back(neighbor);
                }
            }
        }

        opened
    }

    fn explode(&mut self, coords: Coord2) {
        log::info!("Game over, mine hit at {:?}", coords);
        self.state = GameState::GameOver(GameResult::Lost);

        let cell = &mut self.grid[coords];
        cell.revealed = true;
        cell.exploded = true;
        self.grid.reveal_mines();
    }

    fn check_win_condition(&mut self) -> RevealOutcome {
        if !self.grid.all_safe_revealed() {
            return RevealOutcome::Revealed;
        }

        log::info!("You have won!");
        self.state = GameState::GameOver(GameResult::Won);
        self.grid.flag_mines();
        RevealOutcome::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::new(Grid::from_mine_coords(size, mines).unwrap())
    }

    fn revealed_count(board: &Board) -> usize {
        board.grid().iter().filter(|cell| cell.revealed).count()
    }

    #[test]
    fn revealing_last_safe_cell_wins() {
        let mut board = board((2, 1), &[(0, 0)]);
        assert_eq!(board.cell_at((1, 0)).kind, CellKind::Number);
        assert_eq!(board.cell_at((1, 0)).number, 1);

        let outcome = board.reveal((1, 0));

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(board.state(), GameState::GameOver(GameResult::Won));
        assert!(board.cell_at((1, 0)).revealed);
        assert_eq!(board.cell_at((1, 0)).kind, CellKind::Number);
        assert!(board.cell_at((0, 0)).flagged);
        assert!(!board.cell_at((0, 0)).revealed);
    }

    #[test]
    fn revealing_mine_explodes_and_shows_all_mines() {
        let mut board = board((3, 3), &[(0, 0), (2, 2)]);

        let outcome = board.reveal((0, 0));

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(board.state(), GameState::GameOver(GameResult::Lost));
        assert_eq!(board.exploded_at(), Some((0, 0)));
        assert!(board.cell_at((0, 0)).exploded);
        assert!(board.cell_at((2, 2)).revealed);
        assert!(!board.cell_at((2, 2)).exploded);
        assert!(!board.cell_at((1, 1)).revealed);
    }

    #[test]
    fn flood_opens_empty_region_and_numbered_border() {
        // mine column at x = 2 splits the board
        let mut board = board((5, 3), &[(2, 0), (2, 1), (2, 2)]);

        let outcome = board.reveal((0, 1));

        assert_eq!(outcome, RevealOutcome::Revealed);
        for y in 0..3 {
            assert!(board.cell_at((0, y)).revealed);
            assert!(board.cell_at((1, y)).revealed);
            assert!(!board.cell_at((2, y)).revealed);
            assert!(!board.cell_at((3, y)).revealed);
            assert!(!board.cell_at((4, y)).revealed);
        }
        assert_eq!(revealed_count(&board), 6);
    }

    #[test]
    fn number_reveal_does_not_spread() {
        let mut board = board((3, 3), &[(0, 0)]);

        assert_eq!(board.reveal((1, 1)), RevealOutcome::Revealed);
        assert_eq!(revealed_count(&board), 1);
    }

    #[test]
    fn flagged_cell_cannot_be_revealed() {
        let mut board = board((2, 2), &[(0, 0)]);

        assert_eq!(board.toggle_flag((0, 0)), MarkOutcome::Changed);
        assert_eq!(board.reveal((0, 0)), RevealOutcome::NoChange);
        assert!(board.state().is_playing());
        assert!(!board.cell_at((0, 0)).revealed);
    }

    #[test]
    fn flood_clears_flags_on_safe_cells() {
        let mut board = board((4, 1), &[(3, 0)]);
        board.toggle_flag((1, 0));

        let outcome = board.reveal((0, 0));

        assert_eq!(outcome, RevealOutcome::Won);
        assert!(board.cell_at((1, 0)).revealed);
        assert!(!board.cell_at((1, 0)).flagged);
    }

    #[test]
    fn flag_toggle_is_involutive() {
        let mut board = board((2, 2), &[(1, 1)]);
        let before = board.clone();

        board.toggle_flag((0, 1));
        assert!(board.cell_at((0, 1)).flagged);
        assert_eq!(board.mines_left(), 0);
        board.toggle_flag((0, 1));

        assert_eq!(board, before);
    }

    #[test]
    fn flag_ignores_revealed_and_invalid_cells() {
        let mut board = board((2, 2), &[(1, 1)]);
        board.reveal((0, 0));

        assert_eq!(board.toggle_flag((0, 0)), MarkOutcome::NoChange);
        assert_eq!(board.toggle_flag((5, -1)), MarkOutcome::NoChange);
        assert!(!board.cell_at((0, 0)).flagged);
    }

    #[test]
    fn out_of_bounds_reveal_is_noop() {
        let mut board = board((3, 3), &[(1, 1)]);
        let before = board.clone();

        for point in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
            assert_eq!(board.reveal(point), RevealOutcome::NoChange);
        }

        assert_eq!(board, before);
    }

    #[test]
    fn actions_after_game_over_are_ignored() {
        let mut board = board((3, 1), &[(0, 0)]);
        board.reveal((0, 0));
        let before = board.clone();

        assert_eq!(board.reveal((2, 0)), RevealOutcome::NoChange);
        assert_eq!(board.toggle_flag((1, 0)), MarkOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn flag_does_not_win() {
        let mut board = board((2, 1), &[(0, 0)]);

        board.toggle_flag((0, 0));

        assert!(board.state().is_playing());
    }

    #[test]
    fn mines_revealed_at_generation_cannot_be_hit_or_flagged() {
        let mut generator = FixedGridGenerator::from_mine_coords((3, 1), &[(0, 0)])
            .unwrap()
            .with_reveal_mines_on_generate(true);
        let mut board = Board::new(generator.generate());

        assert_eq!(board.reveal((0, 0)), RevealOutcome::NoChange);
        assert_eq!(board.toggle_flag((0, 0)), MarkOutcome::NoChange);
        assert!(board.state().is_playing());
        assert!(!board.cell_at((0, 0)).exploded);

        assert_eq!(board.reveal((2, 0)), RevealOutcome::Won);
        assert_eq!(board.state(), GameState::GameOver(GameResult::Won));
    }

    #[test]
    fn flood_handles_large_boards() {
        let mut board = board((400, 400), &[(399, 399)]);

        let outcome = board.reveal((0, 0));

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(revealed_count(&board), 400 * 400 - 1);
    }
}
