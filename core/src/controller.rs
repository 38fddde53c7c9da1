use serde::{Deserialize, Serialize};

use crate::*;

/// Presentation side of the game, handed the whole board after every change.
pub trait Renderer {
    fn render(&mut self, board: &Board);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, board: &Board) {
        (**self).render(board)
    }
}

/// Discrete player input in grid coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Reveal, or start over once the round has ended.
    Primary(Point),
    /// Toggle a flag.
    Secondary(Point),
    Restart,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    Reveal(RevealOutcome),
    Mark(MarkOutcome),
    NewGame,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Mark(outcome) => outcome.has_update(),
            Self::NewGame => true,
        }
    }
}

/// Owns the current board exclusively and drives it from player actions.
#[derive(Debug)]
pub struct Controller<G, R> {
    generator: G,
    renderer: R,
    board: Board,
}

impl<G: GridGenerator, R: Renderer> Controller<G, R> {
    /// Starts the first game right away.
    pub fn new(mut generator: G, renderer: R) -> Self {
        let board = Board::new(generator.generate());
        let mut controller = Self {
            generator,
            renderer,
            board,
        };
        controller.renderer.render(&controller.board);
        controller
    }

    pub fn config(&self) -> GameConfig {
        self.generator.config()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.board.state()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Discards the current board and deals a new one.
    pub fn new_game(&mut self) {
        self.board = Board::new(self.generator.generate());
        log::debug!("New game started with {:?}", self.generator.config());
        self.renderer.render(&self.board);
    }

    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::Primary(point) => self.primary_action(point),
            Action::Secondary(point) => self.secondary_action(point),
            Action::Restart => {
                self.new_game();
                ActionOutcome::NewGame
            }
        }
    }

    pub fn primary_action(&mut self, point: Point) -> ActionOutcome {
        if self.board.is_game_over() {
            self.new_game();
            return ActionOutcome::NewGame;
        }

        let outcome = ActionOutcome::Reveal(self.board.reveal(point));
        self.render_if_updated(outcome)
    }

    pub fn secondary_action(&mut self, point: Point) -> ActionOutcome {
        let outcome = ActionOutcome::Mark(self.board.toggle_flag(point));
        self.render_if_updated(outcome)
    }

    fn render_if_updated(&mut self, outcome: ActionOutcome) -> ActionOutcome {
        if outcome.has_update() {
            self.renderer.render(&self.board);
        }
        outcome
    }
}
