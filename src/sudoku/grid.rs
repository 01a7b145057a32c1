use std::{
    fmt::{self, Debug, Display},
    ops::Index,
    str::FromStr,
};

use crate::debug;
use crate::error::GridError;

/// A 9x9 sudoku board. `0` marks an unassigned cell.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rows: [[u8; Self::SIZE]; Self::SIZE],
}

impl Grid {
    pub const SIZE: usize = 9;
    pub const BOX: usize = 3;
    pub const UNASSIGNED: u8 = 0;

    pub fn empty() -> Self {
        Self {
            rows: [[Self::UNASSIGNED; Self::SIZE]; Self::SIZE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Panics if the position is off the board or `value > 9`.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(value <= 9);
        self.rows[row][col] = value;
    }

    pub fn rows(&self) -> &[[u8; Self::SIZE]; Self::SIZE] {
        &self.rows
    }

    /// Can `value` go at `(row, col)` without repeating in its row, column, or box?
    pub fn is_safe(&self, row: usize, col: usize, value: u8) -> bool {
        if value == Self::UNASSIGNED {
            return false;
        }

        let box_row = row - row % Self::BOX;
        let box_col = col - col % Self::BOX;

        for i in 0..Self::SIZE {
            if self.rows[row][i] == value || self.rows[i][col] == value {
                return false;
            }
            if self.rows[box_row + i / Self::BOX][box_col + i % Self::BOX] == value {
                return false;
            }
        }
        true
    }

    /// First empty cell in row-major order.
    pub fn find_unassigned(&self) -> Option<(usize, usize)> {
        self.positions()
            .find(|&(row, col)| self.rows[row][col] == Self::UNASSIGNED)
    }

    pub fn is_full(&self) -> bool {
        self.find_unassigned().is_none()
    }

    pub fn count_filled(&self) -> usize {
        self.positions()
            .filter(|&(row, col)| self.rows[row][col] != Self::UNASSIGNED)
            .count()
    }

    /// True if no filled cell repeats a value within a row, column, or box.
    pub fn is_consistent(&self) -> bool {
        self.first_conflict().is_none()
    }

    fn first_conflict(&self) -> Option<(usize, usize)> {
        self.positions().find(|&(row, col)| {
            let value = self.rows[row][col];
            if value == Self::UNASSIGNED {
                return false;
            }
            let mut without = *self;
            without.rows[row][col] = Self::UNASSIGNED;
            !without.is_safe(row, col, value)
        })
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..Self::SIZE * Self::SIZE).map(|i| (i / Self::SIZE, i % Self::SIZE))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Checks the same rules as `FromStr`: every cell in `0..=9`, no conflicts.
impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = GridError;

    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, Self::Error> {
        let grid = Self { rows };
        if let Some((row, col)) = grid
            .positions()
            .find(|&(row, col)| grid.rows[row][col] > 9)
        {
            let value = grid.rows[row][col];
            return Err(GridError::BadValue { row, col, value });
        }

        match grid.first_conflict() {
            Some((row, col)) => Err(GridError::Conflict { row, col }),
            None => Ok(grid),
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u8;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

/// Parse 81 cells: `1`-`9` for givens, `0` or `.` for blanks.
///
/// Whitespace and the `|`, `-`, `+` box-drawing characters are skipped, so the
/// output of both `Display` and `Debug` parses back.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(Self::SIZE * Self::SIZE);
        for c in s.chars() {
            match c {
                '1'..='9' => cells.push(c as u8 - b'0'),
                '0' | '.' => cells.push(Self::UNASSIGNED),
                '|' | '-' | '+' => (),
                c if c.is_whitespace() => (),
                c => return Err(GridError::BadCell(c)),
            }
        }

        if cells.len() != Self::SIZE * Self::SIZE {
            return Err(GridError::BadLength(cells.len()));
        }

        let mut grid = Self::empty();
        for (i, value) in cells.into_iter().enumerate() {
            grid.rows[i / Self::SIZE][i % Self::SIZE] = value;
        }

        match grid.first_conflict() {
            Some((row, col)) => Err(GridError::Conflict { row, col }),
            None => Ok(grid),
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &cell in row {
                write!(f, "{}", debug::cell_char(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 && i % Self::BOX == 0 {
                debug::write_separator(f)?;
                writeln!(f)?;
            }
            debug::write_row(f, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
