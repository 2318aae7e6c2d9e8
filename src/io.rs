//! Input and output adapters for the line-oriented text encoding.
//!
//! ## Input
//!
//! ```text
//! 1          <- piece type to move (1 = Black, 2 = White)
//! 00000      <- N rows: board before the opponent's last move
//! ...
//! 00100      <- N rows: current board
//! ...
//! ```
//!
//! ## Output
//!
//! A single line, either `PASS` or `row,col`.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::agent::Move;
use crate::board::{Grid, Stone};
use crate::constants::{N, SYMBOL_BLACK, SYMBOL_EMPTY, SYMBOL_WHITE};
use crate::position::Position;

/// Malformed input. No decision is made from a partially valid board.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing line {0}")]
    MissingLine(usize),
    #[error("invalid piece type {0:?}, expected 1 or 2")]
    BadPieceType(String),
    #[error("expected {expected} board rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("line {line}: expected {expected} cells, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid symbol {symbol:?}")]
    BadSymbol { line: usize, symbol: char },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The triple a decision is made from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInput {
    pub piece: Stone,
    pub previous: Grid,
    pub current: Grid,
}

impl GameInput {
    pub fn position(&self) -> Position {
        Position::from_snapshots(self.previous, self.current)
    }
}

pub fn parse_input(text: &str) -> Result<GameInput, InputError> {
    let mut lines = text.lines().map(str::trim_end);

    let first = lines.next().ok_or(InputError::MissingLine(1))?;
    let piece = first
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Stone::from_symbol)
        .ok_or_else(|| InputError::BadPieceType(first.trim().to_string()))?;

    let previous = parse_board(&mut lines, 2)?;
    let current = parse_board(&mut lines, 2 + N)?;
    Ok(GameInput {
        piece,
        previous,
        current,
    })
}

fn parse_board<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    first_line: usize,
) -> Result<Grid, InputError> {
    let mut grid = Grid::new();
    for row in 0..N {
        let line_no = first_line + row;
        let line = lines.next().ok_or(InputError::MissingLine(line_no))?;

        let cells: Vec<char> = line.chars().collect();
        if cells.len() != N {
            return Err(InputError::RowLength {
                line: line_no,
                expected: N,
                found: cells.len(),
            });
        }
        for (col, ch) in cells.into_iter().enumerate() {
            let stone = match ch.to_digit(10).map(|d| d as u8) {
                Some(SYMBOL_EMPTY) => None,
                Some(s @ (SYMBOL_BLACK | SYMBOL_WHITE)) => Stone::from_symbol(s),
                _ => {
                    return Err(InputError::BadSymbol {
                        line: line_no,
                        symbol: ch,
                    });
                }
            };
            grid.set((row, col), stone);
        }
    }
    Ok(grid)
}

pub fn read_input(path: impl AsRef<Path>) -> Result<GameInput, InputError> {
    let text = fs::read_to_string(path)?;
    parse_input(&text)
}

pub fn write_output(path: impl AsRef<Path>, mv: Move) -> std::io::Result<()> {
    fs::write(path, mv.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2\n00000\n00000\n00000\n00000\n00000\n00000\n00000\n00100\n00000\n00000\n";

    #[test]
    fn test_parse_sample() {
        let input = parse_input(SAMPLE).unwrap();
        assert_eq!(input.piece, Stone::White);
        assert!(input.previous.is_empty());
        assert_eq!(input.current.get((2, 2)), Some(Stone::Black));
        assert_eq!(input.current.count(Stone::Black), 1);
        assert_eq!(input.position().grid, input.current);
    }

    #[test]
    fn test_parse_crlf() {
        let text = SAMPLE.replace('\n', "\r\n");
        assert!(parse_input(&text).is_ok());
    }

    #[test]
    fn test_bad_piece_type() {
        let text = SAMPLE.replacen('2', "3", 1);
        assert!(matches!(parse_input(&text), Err(InputError::BadPieceType(s)) if s == "3"));
    }

    #[test]
    fn test_missing_rows() {
        let text: String = SAMPLE.lines().take(8).map(|l| format!("{l}\n")).collect();
        assert!(matches!(parse_input(&text), Err(InputError::MissingLine(9))));
        assert!(matches!(parse_input(""), Err(InputError::MissingLine(1))));
    }

    #[test]
    fn test_bad_row() {
        let text = SAMPLE.replacen("00100", "0010", 1);
        assert!(matches!(
            parse_input(&text),
            Err(InputError::RowLength { line: 9, found: 4, .. })
        ));
        let text = SAMPLE.replacen("00100", "00300", 1);
        assert!(matches!(
            parse_input(&text),
            Err(InputError::BadSymbol { line: 9, symbol: '3' })
        ));
    }

    #[test]
    fn test_write_output() {
        let path = std::env::temp_dir().join(format!("little-go-out-{}.txt", std::process::id()));
        write_output(&path, Move::Place((1, 4))).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1,4");
        write_output(&path, Move::Pass).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "PASS");
        fs::remove_file(&path).unwrap();
    }
}
