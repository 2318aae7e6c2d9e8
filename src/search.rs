//! Depth-limited negamax search with alpha-beta pruning.
//!
//! Every level maximises its own view of the position and hands the negated
//! window down to the opponent. Each explored move is played on its own copy
//! of the parent [`Position`], so siblings never observe each other's
//! placements or captures.
//!
//! The root keeps every move whose value ties the best one. Pruning must not
//! change that set, so root children are searched against a bound one point
//! below the current best: a move that ties comes back with its exact value,
//! and a worse move can only come back strictly below the best.

use tracing::{debug, trace};

use crate::board::{Point, Stone};
use crate::constants::{INF, SEARCH_DEPTH};
use crate::eval::score;
use crate::position::Position;

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootResult {
    /// Best value from the point of view of the side to move
    pub value: i32,
    /// All moves reaching `value`, in row-major order
    pub moves: Vec<Point>,
}

/// Alpha-beta searcher with a fixed depth.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u32,
    pruning: bool,
    nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SEARCH_DEPTH)
    }
}

impl Searcher {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            pruning: true,
            nodes: 0,
        }
    }

    /// Enable or disable alpha-beta cutoffs. Results are identical either way.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nodes visited by the last root search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Negamax value of `pos` for `side`, searched `depth` plies deep.
    ///
    /// Fail-soft: a value at or above `beta` is a lower bound, a value at or
    /// below `alpha` an upper bound. A node without legal moves is scored
    /// statically.
    pub fn search(
        &mut self,
        pos: &Position,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        side: Stone,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return score(pos, side);
        }

        let moves = pos.legal_moves(side);
        if moves.is_empty() {
            return score(pos, side);
        }

        let mut best = -INF;
        for pt in moves {
            let child = play_copy(pos, pt, side);
            let value = -self.search(&child, depth - 1, -beta, -alpha, side.opponent());
            best = best.max(value);

            if self.pruning {
                alpha = alpha.max(value);
                if alpha >= beta {
                    trace!(?pt, value, beta, "cutoff");
                    break;
                }
            }
        }
        best
    }

    /// Search every legal move of `side` and return the tied best moves.
    pub fn search_root(&mut self, pos: &Position, side: Stone) -> RootResult {
        let moves = pos.legal_moves(side);
        self.search_moves(pos, &moves, side)
    }

    /// Search the given root moves and return those tied for the best value.
    pub fn search_moves(&mut self, pos: &Position, moves: &[Point], side: Stone) -> RootResult {
        self.nodes = 0;
        let mut best = -INF;
        let mut tied = Vec::new();

        for &pt in moves {
            let child = play_copy(pos, pt, side);
            let alpha = if self.pruning { best - 1 } else { -INF };
            let value = -self.search(
                &child,
                self.depth.saturating_sub(1),
                -INF,
                -alpha,
                side.opponent(),
            );
            trace!(?pt, value, "root move");

            if value > best {
                best = value;
                tied.clear();
                tied.push(pt);
            } else if value == best {
                tied.push(pt);
            }
        }

        debug!(
            depth = self.depth,
            nodes = self.nodes,
            value = best,
            ties = tied.len(),
            "root search finished"
        );
        RootResult {
            value: best,
            moves: tied,
        }
    }
}

/// Play a legal move on a fresh copy of `pos`.
fn play_copy(pos: &Position, pt: Point, side: Stone) -> Position {
    let mut child = *pos;
    child.place(pt, side);
    child.remove_captured(side.opponent());
    child
}
