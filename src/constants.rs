//! Constants for board dimensions, scoring and search parameters.
//!
//! Little-Go is always played on a 5x5 board, so unlike larger engines the
//! size is not configurable. Everything that depends on the board size is
//! derived from [`N`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 5;

/// Number of points on the board.
pub const AREA: usize = N * N;

/// Maximum number of moves (placements and passes) in a game.
pub const MAX_MOVES: usize = AREA - 1;

/// The centre point, played as the opening move by the first player.
pub const CENTER: (usize, usize) = (N / 2, N / 2);

/// Offsets to the orthogonal neighbours of a point.
/// Order: North, East, South, West
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

// =============================================================================
// Scoring
// =============================================================================

/// Komi (compensation points for White).
pub const KOMI: f32 = N as f32 / 2.0;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies: our move, the reply, then static evaluation.
pub const SEARCH_DEPTH: u32 = 2;

/// Score bound used as "infinity" by the alpha-beta window.
/// Kept well inside `i32` so negation never overflows.
pub const INF: i32 = 1_000_000;

// =============================================================================
// Input Symbols
// =============================================================================

/// Empty point in the text encoding.
pub const SYMBOL_EMPTY: u8 = 0;

/// Black stone (first player) in the text encoding.
pub const SYMBOL_BLACK: u8 = 1;

/// White stone (second player) in the text encoding.
pub const SYMBOL_WHITE: u8 = 2;
