//! Helpers for Debug impls.

use std::fmt;

/// Write one row of 9 cells, split into boxes of 3: `5 3 . | . 7 . | . . .`
pub(crate) fn write_row(f: &mut fmt::Formatter<'_>, row: &[u8; 9]) -> fmt::Result {
    for (i, &cell) in row.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        if i > 0 && i % 3 == 0 {
            write!(f, "| ")?;
        }
        write!(f, "{}", cell_char(cell))?;
    }
    Ok(())
}

/// The horizontal line between bands of boxes.
pub(crate) fn write_separator(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "------+-------+------")
}

pub(crate) fn cell_char(cell: u8) -> char {
    match cell {
        0 => '.',
        d => char::from(b'0' + d),
    }
}
