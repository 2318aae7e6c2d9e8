//! Game driver for playing agents against each other.
//!
//! Each [`Agent`] decision is stateless, so the cross-turn rules live here:
//! alternating turns, ending the game on two consecutive passes or when the
//! move cap is reached, and scoring the final board.

use tracing::{debug, info};

use crate::agent::{Agent, Move};
use crate::board::{Point, Stone};
use crate::position::{MoveError, Position};

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    to_move: Stone,
    history: Vec<(Stone, Move)>,
    finished: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            position: Position::new(),
            to_move: Stone::Black,
            history: Vec::new(),
            finished: false,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn history(&self) -> &[(Stone, Move)] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.finished
    }

    /// Play a move for the side to move. Returns the captured points.
    pub fn apply(&mut self, mv: Move) -> Result<Vec<Point>, MoveError> {
        let captured = match mv {
            Move::Place(pt) => self.position.play(pt, self.to_move)?,
            Move::Pass => {
                // The board only stays unchanged across a ply when that ply was a pass
                let second_pass =
                    !self.history.is_empty() && self.position.is_game_over(true);
                self.position.pass();
                self.finished |= second_pass;
                Vec::new()
            }
        };
        debug!(player = ?self.to_move, %mv, captured = captured.len(), "move played");

        self.history.push((self.to_move, mv));
        self.to_move = self.to_move.opponent();
        self.finished |= self.position.is_game_over(false);
        Ok(captured)
    }
}

/// Final outcome of a finished game.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub moves: Vec<(Stone, Move)>,
    pub final_position: Position,
    pub black_score: f32,
    pub white_score: f32,
    pub winner: Stone,
}

/// Play a full game between two agents.
pub fn play_game(black: &mut Agent, white: &mut Agent) -> Result<GameSummary, MoveError> {
    let mut game = Game::new();
    while !game.is_over() {
        let agent = match game.to_move() {
            Stone::Black => &mut *black,
            Stone::White => &mut *white,
        };
        let mv = agent.decide(game.position());
        game.apply(mv)?;
    }

    let pos = *game.position();
    let summary = GameSummary {
        moves: game.history,
        final_position: pos,
        black_score: pos.area_score(Stone::Black),
        white_score: pos.area_score(Stone::White),
        winner: pos.winner(),
    };
    info!(
        moves = summary.moves.len(),
        black = summary.black_score,
        white = summary.white_score,
        winner = ?summary.winner,
        "game over"
    );
    Ok(summary)
}
