use std::io::{self, Write};

use sapper_core::*;

/// Glyph for a single cell as the player is allowed to see it.
pub fn cell_glyph(cell: &Cell) -> char {
    match cell {
        Cell { exploded: true, .. } => 'X',
        Cell { flagged: true, .. } => 'F',
        Cell {
            revealed: false, ..
        } => '#',
        Cell {
            kind: CellKind::Mine,
            ..
        } => '*',
        Cell {
            kind: CellKind::Number,
            number,
            ..
        } => char::from_digit(u32::from(*number), 10).unwrap_or('?'),
        _ => '.',
    }
}

fn status_line(board: &Board) -> String {
    match board.state() {
        GameState::Playing => format!("mines left: {}", board.mines_left()),
        GameState::GameOver(GameResult::Won) => {
            "You have won! (reveal anywhere to play again)".into()
        }
        GameState::GameOver(GameResult::Lost) => {
            "Game over! (reveal anywhere to play again)".into()
        }
    }
}

/// Draws the board as a character grid, row `y = 0` first.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn draw(&mut self, board: &Board) -> io::Result<()> {
        let (width, height) = board.size();
        let grid = board.grid();

        writeln!(self.out, "{}", status_line(board))?;
        write!(self.out, "    ")?;
        for x in 0..width {
            write!(self.out, "{}", x % 10)?;
        }
        writeln!(self.out)?;

        for y in 0..height {
            write!(self.out, "{:>3} ", y)?;
            for x in 0..width {
                write!(self.out, "{}", cell_glyph(&grid[(x, y)]))?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, board: &Board) {
        if let Err(err) = self.draw(board) {
            log::error!("Could not draw board: {}", err);
        }
    }
}

/// Writes one JSON [`Snapshot`] per line.
#[derive(Debug)]
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn draw(&mut self, board: &Board) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, &Snapshot::from_board(board))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, board: &Board) {
        if let Err(err) = self.draw(board) {
            log::error!("Could not write snapshot: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::new(Grid::from_mine_coords(size, mines).unwrap())
    }

    fn rendered(board: &Board) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(board);
        String::from_utf8(renderer.out).unwrap()
    }

    #[test]
    fn hidden_board_is_all_hashes() {
        let text = rendered(&board((3, 2), &[(0, 0)]));

        assert_eq!(text, "mines left: 1\n    012\n  0 ###\n  1 ###\n");
    }

    #[test]
    fn lost_board_shows_mines_and_explosion() {
        let mut board = board((3, 1), &[(0, 0), (2, 0)]);
        board.reveal((2, 0));

        let text = rendered(&board);

        assert!(text.starts_with("Game over!"));
        assert!(text.ends_with("  0 *#X\n"));
    }

    #[test]
    fn glyphs_follow_cell_state() {
        let mut cell = Cell::empty((0, 0));
        assert_eq!(cell_glyph(&cell), '#');
        cell.revealed = true;
        assert_eq!(cell_glyph(&cell), '.');
        cell.kind = CellKind::Number;
        cell.number = 3;
        assert_eq!(cell_glyph(&cell), '3');
        cell.revealed = false;
        cell.flagged = true;
        assert_eq!(cell_glyph(&cell), 'F');
    }

    #[test]
    fn json_renderer_writes_snapshot_lines() {
        let board = board((2, 1), &[(1, 0)]);
        let mut renderer = JsonRenderer::new(Vec::new());

        renderer.render(&board);
        renderer.render(&board);

        let output = String::from_utf8(renderer.out).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let snapshot: Snapshot = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(snapshot, Snapshot::from_board(&board));
    }
}
