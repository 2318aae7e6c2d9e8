//! Little-Go: a move-selection agent for 5x5 Go.
//!
//! Given the board before the opponent's last move, the current board and
//! the colour to play, the agent picks a legal move with a depth-limited
//! negamax search and a static liberty-based evaluation.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, komi and search parameters
//! - [`board`] - Grid representation, groups and liberties
//! - [`position`] - Rules engine (legality, captures, repeat check, scoring)
//! - [`eval`] - Static evaluation
//! - [`search`] - Negamax with alpha-beta pruning
//! - [`agent`] - Single-turn decision and random tie-break
//! - [`game`] - Driver for playing full games between agents
//! - [`io`] - Text input and output encodings
//!
//! ## Example
//!
//! ```
//! use little_go::agent::{Agent, Move};
//! use little_go::board::Stone;
//! use little_go::position::Position;
//!
//! let mut pos = Position::new();
//! pos.play((2, 2), Stone::Black).unwrap();
//!
//! let mut agent = Agent::with_seed(Stone::White, 1);
//! let mv = agent.decide(&pos);
//! assert!(matches!(mv, Move::Place(_)));
//! println!("White plays {mv}");
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod io;
pub mod position;
pub mod search;
