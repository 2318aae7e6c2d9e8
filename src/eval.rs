//! Static evaluation of a position.
//!
//! Each side's aggregate is built by scanning the board row-major and adding,
//! for every stone of that side, the running count of that side's stones seen
//! so far plus the liberty count of the stone's group. The running count
//! weights later stones more heavily, which makes the heuristic depend on scan
//! order. That weighting is part of how moves are ranked and is kept as is.

use crate::board::{Grid, Stone, points};
use crate::position::Position;

/// Aggregate heuristic value of one side's stones.
pub fn stone_aggregate(grid: &Grid, color: Stone) -> i32 {
    let mut seen = 0;
    let mut total = 0;
    for pt in points() {
        if grid.get(pt) == Some(color) {
            seen += 1;
            total += seen + grid.liberty_count(pt) as i32;
        }
    }
    total
}

/// Score `pos` from the point of view of `perspective`.
///
/// Positive is good for `perspective`; asking for the other side yields the
/// negated value, as negamax expects.
pub fn score(pos: &Position, perspective: Stone) -> i32 {
    stone_aggregate(&pos.grid, perspective) - stone_aggregate(&pos.grid, perspective.opponent())
}
