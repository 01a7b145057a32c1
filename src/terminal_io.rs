use crate::sudoku::{Grid, Puzzle};
use anyhow::Result;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::{
    fmt::{self, Display},
    io::{self, Write},
};

const GIVEN: Color = Color::White;
const FILLED: Color = Color::Cyan;
const RULE: Color = Color::DarkGrey;

/// Draw `grid` in a boxed layout that `Grid::from_str` parses back.
///
/// With `color`, cells that are also set in `givens` are drawn as clues and
/// the rest in the "filled" color. Without it, no escape codes are written.
pub fn render_grid(
    out: &mut impl Write,
    grid: &Grid,
    givens: Option<&Grid>,
    color: bool,
) -> Result<()> {
    for (row, cells) in grid.rows().iter().enumerate() {
        if row > 0 && row % Grid::BOX == 0 {
            paint(out, color, RULE)?;
            out.queue(Print("------+-------+------\n"))?;
        }

        for (col, &cell) in cells.iter().enumerate() {
            if col > 0 && col % Grid::BOX == 0 {
                paint(out, color, RULE)?;
                out.queue(Print("| "))?;
            }

            let is_given = givens.map_or(true, |g| g.get(row, col) != Grid::UNASSIGNED);
            paint(out, color, if is_given { GIVEN } else { FILLED })?;
            out.queue(Print(DisplayCell(cell)))?;

            if col + 1 < Grid::SIZE {
                out.queue(Print(' '))?;
            }
        }
        out.queue(Print('\n'))?;
    }

    if color {
        out.queue(ResetColor)?;
    }
    out.flush()?;
    Ok(())
}

fn paint(out: &mut impl Write, color: bool, c: Color) -> io::Result<()> {
    if color {
        out.queue(SetForegroundColor(c))?;
    }
    Ok(())
}

/// The level line goes to stderr so stdout stays a parseable grid.
pub fn render_puzzle(
    out: &mut impl Write,
    puzzle: &Puzzle,
    show_solution: bool,
    color: bool,
) -> Result<()> {
    eprintln!("Level: {}", puzzle.level);
    render_grid(out, &puzzle.question, None, color)?;

    if show_solution {
        out.queue(Print("\n"))?;
        render_grid(out, &puzzle.original, Some(&puzzle.question), color)?;
    }
    Ok(())
}

/// Helper for `render_grid`.
struct DisplayCell(u8);

impl Display for DisplayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Grid::UNASSIGNED => write!(f, "."),
            d => write!(f, "{d}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop ANSI escape sequences, keeping the printable text.
    fn strip_ansi(bytes: &[u8]) -> String {
        let s = String::from_utf8_lossy(bytes);
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn renders_boxed_layout() {
        let mut grid = Grid::empty();
        grid.set(0, 0, 5);
        grid.set(8, 8, 9);

        let mut buf: Vec<u8> = vec![];
        render_grid(&mut buf, &grid, None, true).unwrap();

        let text = strip_ansi(&buf);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "5 . . | . . . | . . .");
        assert_eq!(lines[3], "------+-------+------");
        assert_eq!(lines[10], ". . . | . . . | . . 9");
    }

    #[test]
    fn plain_output_parses_back() {
        let mut grid = Grid::empty();
        grid.set(0, 0, 5);
        grid.set(4, 4, 1);
        let mut solved = grid;
        solved.set(0, 1, 2);

        let mut buf: Vec<u8> = vec![];
        render_grid(&mut buf, &solved, Some(&grid), false).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains('\u{1b}'));
        assert!(!text.contains('\r'));
        assert_eq!(text.lines().count(), 11);
        assert_eq!(text.parse::<Grid>(), Ok(solved));
    }
}
