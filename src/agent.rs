//! Move selection for one turn.
//!
//! An [`Agent`] is stateless between turns apart from its random number
//! generator: it looks at one [`Position`], searches it, and picks uniformly
//! among the moves tied for the best value.

use std::fmt;

use tracing::{debug, info};

use crate::board::{Point, Stone};
use crate::constants::CENTER;
use crate::position::Position;
use crate::search::Searcher;

/// A decision: place a stone or pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Place(Point),
    Pass,
}

/// Formats as `row,col` or `PASS`, the output encoding.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place((row, col)) => write!(f, "{row},{col}"),
            Move::Pass => write!(f, "PASS"),
        }
    }
}

pub struct Agent {
    piece: Stone,
    searcher: Searcher,
    rng: fastrand::Rng,
}

impl Agent {
    pub fn new(piece: Stone) -> Self {
        Self {
            piece,
            searcher: Searcher::default(),
            rng: fastrand::Rng::new(),
        }
    }

    /// Agent with a deterministic tie-break.
    pub fn with_seed(piece: Stone, seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            ..Self::new(piece)
        }
    }

    pub fn with_searcher(mut self, searcher: Searcher) -> Self {
        self.searcher = searcher;
        self
    }

    pub fn piece(&self) -> Stone {
        self.piece
    }

    /// Choose a move for this agent's colour.
    ///
    /// 1. No legal placement: pass.
    /// 2. Empty board and we move first: take the centre without searching.
    /// 3. Otherwise search every legal move and pick one of the best at random.
    pub fn decide(&mut self, pos: &Position) -> Move {
        let legal = pos.legal_moves(self.piece);
        if legal.is_empty() {
            info!(piece = ?self.piece, "no legal moves, passing");
            return Move::Pass;
        }

        if pos.grid.is_empty() && self.piece == Stone::Black {
            debug!("empty board, opening at the centre");
            return Move::Place(CENTER);
        }

        let result = self.searcher.search_moves(pos, &legal, self.piece);
        if result.moves.is_empty() {
            return Move::Pass;
        }
        let pick = result.moves[self.rng.usize(..result.moves.len())];
        info!(
            piece = ?self.piece,
            value = result.value,
            candidates = result.moves.len(),
            nodes = self.searcher.nodes(),
            "selected {},{}",
            pick.0,
            pick.1
        );
        Move::Place(pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Grid;

    fn pos(s: &str) -> Position {
        let grid: Grid = s.parse().unwrap();
        Position::from_snapshots(grid, grid)
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Place((2, 3)).to_string(), "2,3");
        assert_eq!(Move::Pass.to_string(), "PASS");
    }

    #[test]
    fn test_opening_is_centre() {
        let mut agent = Agent::with_seed(Stone::Black, 7);
        assert_eq!(agent.decide(&Position::new()), Move::Place((2, 2)));
        // The shortcut skips the search entirely
        assert_eq!(agent.searcher.nodes(), 0);
    }

    #[test]
    fn test_second_player_on_empty_board_searches() {
        let mut agent = Agent::with_seed(Stone::White, 7);
        let mv = agent.decide(&Position::new());
        assert!(matches!(mv, Move::Place(_)));
        assert!(agent.searcher.nodes() > 0);
    }

    #[test]
    fn test_pass_without_legal_moves() {
        // Every empty point is suicide for White
        let p = pos(
            "X.X.X
             .X.X.
             X.X.X
             .X.X.
             X.X.X",
        );
        assert!(p.legal_moves(Stone::White).is_empty());
        let mut agent = Agent::with_seed(Stone::White, 1);
        assert_eq!(agent.decide(&p), Move::Pass);
    }

    #[test]
    fn test_choice_is_among_best() {
        let p = pos(
            ".....
             .....
             ..X..
             .....
             .....",
        );
        let best = Searcher::default().search_root(&p, Stone::White);
        for seed in 0..10 {
            let mut agent = Agent::with_seed(Stone::White, seed);
            match agent.decide(&p) {
                Move::Place(pt) => assert!(best.moves.contains(&pt)),
                Move::Pass => panic!("unexpected pass"),
            }
        }
    }

    #[test]
    fn test_same_seed_same_move() {
        let p = pos(
            "X....
             .O...
             ..X..
             .....
             .....",
        );
        let a = Agent::with_seed(Stone::White, 42).decide(&p);
        let b = Agent::with_seed(Stone::White, 42).decide(&p);
        assert_eq!(a, b);
    }
}
