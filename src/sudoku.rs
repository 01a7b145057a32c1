mod generate;
mod grid;
mod solve;

pub use generate::{fill, generate, remove_cells, Level, Puzzle};
pub use grid::Grid;
pub use solve::{is_solvable, solve};
