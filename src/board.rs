//! Two-dimensional board grid with group and liberty detection.
//!
//! [`Grid`] is a plain `Copy` value: cloning a board for a search branch is a
//! 25-byte memcpy and no two branches can ever alias the same cells.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DELTA, N, SYMBOL_BLACK, SYMBOL_EMPTY, SYMBOL_WHITE};
use crate::io::InputError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Piece type as used by the text encoding (1 = Black, 2 = White).
    pub fn symbol(self) -> u8 {
        match self {
            Stone::Black => SYMBOL_BLACK,
            Stone::White => SYMBOL_WHITE,
        }
    }

    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            SYMBOL_BLACK => Some(Stone::Black),
            SYMBOL_WHITE => Some(Stone::White),
            _ => None,
        }
    }
}

/// A point on the board as `(row, col)`, both zero-indexed.
pub type Point = (usize, usize);

/// Orthogonally adjacent in-bounds points, in N, E, S, W order.
pub fn neighbors((row, col): Point) -> impl Iterator<Item = Point> {
    DELTA.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < N && c < N).then_some((r, c))
    })
}

/// All board points in row-major order.
pub fn points() -> impl Iterator<Item = Point> {
    (0..N).flat_map(|row| (0..N).map(move |col| (row, col)))
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Option<Stone>; N]; N],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_bounds((row, col): Point) -> bool {
        row < N && col < N
    }

    /// Stone at a point; `None` for empty or out-of-bounds points.
    pub fn get(&self, (row, col): Point) -> Option<Stone> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Sets or clears a point. Out-of-bounds points are ignored.
    pub fn set(&mut self, (row, col): Point, stone: Option<Stone>) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = stone;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Number of stones of one colour on the board.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(stone))
            .count()
    }

    /// The maximal set of same-coloured stones connected to `start`.
    ///
    /// Returns an empty set when `start` is empty or off the board.
    pub fn group(&self, start: Point) -> Vec<Point> {
        let Some(color) = self.get(start) else {
            return Vec::new();
        };
        let mut stack = vec![start];
        let mut visited = [[false; N]; N];
        let mut out = Vec::new();

        while let Some(pt) = stack.pop() {
            if visited[pt.0][pt.1] {
                continue;
            }
            visited[pt.0][pt.1] = true;
            out.push(pt);
            for n in neighbors(pt) {
                if !visited[n.0][n.1] && self.get(n) == Some(color) {
                    stack.push(n);
                }
            }
        }
        out
    }

    /// Distinct empty points adjacent to any member of the group at `start`.
    pub fn liberties(&self, start: Point) -> Vec<Point> {
        let mut seen = [[false; N]; N];
        let mut libs = Vec::new();
        for pt in self.group(start) {
            for n in neighbors(pt) {
                if self.get(n).is_none() && !seen[n.0][n.1] {
                    seen[n.0][n.1] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    pub fn liberty_count(&self, start: Point) -> usize {
        self.liberties(start).len()
    }

    /// Remove every group of `color` that has no liberties.
    ///
    /// Returns the removed points in row-major discovery order.
    pub fn remove_dead(&mut self, color: Stone) -> Vec<Point> {
        let mut dead = Vec::new();
        let mut checked = [[false; N]; N];
        for pt in points() {
            if checked[pt.0][pt.1] || self.get(pt) != Some(color) {
                continue;
            }
            let group = self.group(pt);
            for &(r, c) in &group {
                checked[r][c] = true;
            }
            if self.liberty_count(pt) == 0 {
                dead.extend(group);
            }
        }
        for &pt in &dead {
            self.set(pt, None);
        }
        dead
    }

    /// Rows as text-encoding symbols (0 empty, 1 Black, 2 White).
    pub fn symbols(&self) -> [[u8; N]; N] {
        self.cells
            .map(|row| row.map(|cell| cell.map_or(SYMBOL_EMPTY, Stone::symbol)))
    }
}

/// Parses a diagram of `N` rows of `N` cells.
///
/// Accepts `X`/`1` for Black, `O`/`2` for White and `.`/`0` for empty.
/// Whitespace inside a row is ignored and blank lines are skipped.
impl FromStr for Grid {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .collect();
        if rows.len() != N {
            return Err(InputError::RowCount {
                expected: N,
                found: rows.len(),
            });
        }

        let mut grid = Grid::new();
        for (row, (line_no, line)) in rows.into_iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != N {
                return Err(InputError::RowLength {
                    line: line_no + 1,
                    expected: N,
                    found: cells.len(),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let stone = match ch {
                    'X' | '1' => Some(Stone::Black),
                    'O' | '2' => Some(Stone::White),
                    '.' | '0' => None,
                    symbol => {
                        return Err(InputError::BadSymbol {
                            line: line_no + 1,
                            symbol,
                        });
                    }
                };
                grid.set((row, col), stone);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Some(Stone::Black) => 'X',
                    Some(Stone::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
