//! Little-Go position and move execution.
//!
//! This module provides the rules engine:
//! - Legality checking (occupied points, suicide, single-step repeat)
//! - Stone placement and capture resolution
//! - End-of-game detection and area scoring with komi
//!
//! A [`Position`] only remembers the grid from one ply back. Full superko
//! history and pass tracking belong to whoever drives the game (see
//! [`crate::game`]).

use thiserror::Error;

use crate::board::{Grid, Point, Stone, points};
use crate::constants::{KOMI, MAX_MOVES};

/// Reason a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Point lies outside the board
    #[error("Illegal move: point is off the board")]
    OutOfBounds,
    /// Point is not empty
    #[error("Illegal move: point not EMPTY")]
    Occupied,
    /// Move would leave its own group without liberties after captures
    #[error("Illegal move: suicide")]
    Suicide,
    /// Move would recreate the position from before the opponent's last move
    #[error("Illegal move: repeats the previous position")]
    Repeat,
}

/// A Little-Go position.
///
/// `Position` is `Copy`; the search clones it once per explored move so
/// sibling branches never share a grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// Current board
    pub grid: Grid,
    /// Board immediately before the last move (placement or pass)
    pub previous: Grid,
    /// Number of moves played so far
    pub move_count: usize,
    /// Komi (compensation points for White)
    pub komi: f32,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    pub fn new() -> Self {
        Self::from_snapshots(Grid::new(), Grid::new())
    }

    /// Build a position from the two observed boards.
    ///
    /// The move counter starts at zero because a snapshot carries no history.
    pub fn from_snapshots(previous: Grid, current: Grid) -> Self {
        Position {
            grid: current,
            previous,
            move_count: 0,
            komi: KOMI,
        }
    }

    pub fn with_move_count(mut self, move_count: usize) -> Self {
        self.move_count = move_count;
        self
    }

    /// Simulate a placement on a scratch grid and return the result.
    ///
    /// Opposing captures are resolved before the mover's own liberties are
    /// checked, so a move that is only suicidal in isolation stays legal when
    /// it captures. `self` is never modified.
    pub fn try_move(&self, pt: Point, player: Stone) -> Result<Grid, MoveError> {
        if !Grid::in_bounds(pt) {
            return Err(MoveError::OutOfBounds);
        }
        if self.grid.get(pt).is_some() {
            return Err(MoveError::Occupied);
        }

        let mut scratch = self.grid;
        scratch.set(pt, Some(player));
        scratch.remove_dead(player.opponent());

        if scratch.liberty_count(pt) == 0 {
            return Err(MoveError::Suicide);
        }
        if scratch == self.previous {
            return Err(MoveError::Repeat);
        }
        Ok(scratch)
    }

    pub fn check_move(&self, pt: Point, player: Stone) -> Result<(), MoveError> {
        self.try_move(pt, player).map(|_| ())
    }

    pub fn is_legal_move(&self, pt: Point, player: Stone) -> bool {
        self.try_move(pt, player).is_ok()
    }

    /// All legal placements for `player` in row-major order.
    pub fn legal_moves(&self, player: Stone) -> Vec<Point> {
        points().filter(|&pt| self.is_legal_move(pt, player)).collect()
    }

    /// Put a stone on the board without resolving captures.
    ///
    /// Callers must follow up with [`Position::remove_captured`] before any
    /// further legality or liberty query.
    pub fn place(&mut self, pt: Point, player: Stone) {
        self.previous = self.grid;
        self.grid.set(pt, Some(player));
        self.move_count += 1;
    }

    /// Remove all groups of `color` left without liberties.
    pub fn remove_captured(&mut self, color: Stone) -> Vec<Point> {
        self.grid.remove_dead(color)
    }

    /// Check and play a move, resolving captures. Returns the captured points.
    pub fn play(&mut self, pt: Point, player: Stone) -> Result<Vec<Point>, MoveError> {
        self.check_move(pt, player)?;
        self.place(pt, player);
        Ok(self.remove_captured(player.opponent()))
    }

    /// Execute a pass move.
    pub fn pass(&mut self) {
        self.previous = self.grid;
        self.move_count += 1;
    }

    /// Whether the game has ended.
    ///
    /// The game ends when the move cap is reached, or when `passing` is set
    /// and the board did not change on the previous ply (two passes in a row).
    pub fn is_game_over(&self, passing: bool) -> bool {
        self.move_count >= MAX_MOVES || (passing && self.grid == self.previous)
    }

    /// Area score: stones on the board, plus komi for White.
    pub fn area_score(&self, color: Stone) -> f32 {
        let stones = self.grid.count(color) as f32;
        match color {
            Stone::Black => stones,
            Stone::White => stones + self.komi,
        }
    }

    /// Winner by area score. Komi is fractional so there are no ties.
    pub fn winner(&self) -> Stone {
        if self.area_score(Stone::Black) > self.area_score(Stone::White) {
            Stone::Black
        } else {
            Stone::White
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(previous: &str, current: &str) -> Position {
        Position::from_snapshots(previous.parse().unwrap(), current.parse().unwrap())
    }

    fn single(current: &str) -> Position {
        let grid: Grid = current.parse().unwrap();
        Position::from_snapshots(grid, grid)
    }

    #[test]
    fn test_empty_position() {
        let pos = Position::new();
        assert!(pos.grid.is_empty());
        assert_eq!(pos.move_count, 0);
        assert_eq!(pos.komi, 2.5);
        assert_eq!(pos.legal_moves(Stone::Black).len(), 25);
    }

    #[test]
    fn test_occupied_and_off_board() {
        let pos = single(
            "X....
             .....
             .....
             .....
             .....",
        );
        assert_eq!(pos.check_move((0, 0), Stone::White), Err(MoveError::Occupied));
        assert_eq!(pos.check_move((5, 0), Stone::White), Err(MoveError::OutOfBounds));
        assert_eq!(pos.check_move((0, 1), Stone::White), Ok(()));
    }

    #[test]
    fn test_play_move_suicide() {
        let pos = single(
            ".X...
             X....
             .....
             .....
             .....",
        );
        assert_eq!(pos.check_move((0, 0), Stone::White), Err(MoveError::Suicide));
        // Filling our own eye is not suicide while the group keeps a liberty
        assert_eq!(pos.check_move((0, 0), Stone::Black), Ok(()));
    }

    #[test]
    fn test_suicide_shape_legal_when_capturing() {
        let pos = single(
            ".XO..
             XO...
             O....
             .....
             .....",
        );
        let before = pos;
        assert_eq!(pos.check_move((0, 0), Stone::White), Ok(()));
        // The check ran on a scratch copy
        assert_eq!(pos, before);

        let mut pos = pos;
        let mut captured = pos.play((0, 0), Stone::White).unwrap();
        captured.sort();
        assert_eq!(captured, vec![(0, 1), (1, 0)]);
        assert_eq!(pos.grid.count(Stone::Black), 0);
        assert_eq!(pos.grid.liberty_count((0, 0)), 2);
    }

    #[test]
    fn test_capture_removes_whole_group() {
        let mut pos = single(
            ".OX..
             XOX..
             XX...
             .....
             .....",
        );
        let captured = pos.play((0, 0), Stone::Black).unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(pos.grid.get((0, 1)), None);
        assert_eq!(pos.grid.get((1, 1)), None);
        assert!(pos.grid.group((0, 1)).is_empty());
        assert!(pos.grid.liberties((0, 0)).contains(&(0, 1)));
        assert_eq!(pos.move_count, 1);
    }

    #[test]
    fn test_repeat_rule() {
        // Black just captured at (1,2); White retaking at (1,1) recreates
        // the board from before Black's move.
        let pos = position(
            ".XO..
             XO.O.
             .XO..
             .....
             .....",
            ".XO..
             X.XO.
             .XO..
             .....
             .....",
        );
        assert_eq!(pos.check_move((1, 1), Stone::White), Err(MoveError::Repeat));
        assert!(!pos.legal_moves(Stone::White).contains(&(1, 1)));
        // Same point with a different history is a normal capture
        let fresh = single(
            ".XO..
             X.XO.
             .XO..
             .....
             .....",
        );
        assert_eq!(fresh.check_move((1, 1), Stone::White), Ok(()));
    }

    #[test]
    fn test_place_records_previous() {
        let mut pos = Position::new();
        pos.place((2, 2), Stone::Black);
        assert!(pos.previous.is_empty());
        assert_eq!(pos.grid.get((2, 2)), Some(Stone::Black));
        assert!(pos.remove_captured(Stone::White).is_empty());
    }

    #[test]
    fn test_legal_moves_row_major() {
        let pos = single(
            "X.X..
             .X...
             .....
             .....
             .....",
        );
        let moves = pos.legal_moves(Stone::White);
        // (0,1) is suicide for White
        assert_eq!(moves[0], (0, 3));
        assert_eq!(moves.len(), 25 - 4);
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_game_over() {
        let mut pos = Position::new();
        pos.play((2, 2), Stone::Black).unwrap();
        assert!(!pos.is_game_over(false));
        assert!(!pos.is_game_over(true));
        pos.pass();
        // Black passing now would be the second consecutive pass
        assert!(pos.is_game_over(true));
        assert!(!pos.is_game_over(false));

        let capped = Position::new().with_move_count(MAX_MOVES);
        assert!(capped.is_game_over(false));
    }

    #[test]
    fn test_area_score_and_winner() {
        let pos = single(
            "XXX..
             O....
             .....
             .....
             .....",
        );
        assert_eq!(pos.area_score(Stone::Black), 3.0);
        assert_eq!(pos.area_score(Stone::White), 3.5);
        assert_eq!(pos.winner(), Stone::White);
    }
}
