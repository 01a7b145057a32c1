use clap::{Parser, Subcommand};
use toybox::sudoku::Level;

#[derive(Parser)]
#[clap(
    version = "0.1",
    about = "Stacks, heaps, and sudoku in the terminal"
)]
pub struct Cli {
    /// More output on stderr; repeat for more detail.
    #[clap(short, long, parse(from_occurrences), global = true)]
    pub verbose: u64,

    #[clap(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand)]
pub enum CliCommand {
    #[clap(about = "Push values onto a stack, then pop them all off")]
    Stack {
        #[clap(value_name = "VALUE")]
        values: Vec<String>,
    },

    #[clap(about = "Insert integers into a max-heap and extract the largest")]
    Heap {
        #[clap(value_name = "VALUE", required = true, allow_hyphen_values = true)]
        values: Vec<i64>,
    },

    #[clap(about = "Generate or solve sudoku puzzles")]
    Sudoku {
        #[clap(subcommand)]
        command: SudokuCommand,
    },
}

#[derive(Subcommand)]
pub enum SudokuCommand {
    #[clap(about = "Generate a new puzzle")]
    Generate {
        #[clap(short, long, default_value = "easy")]
        level: Level,

        /// Seed the generator for a reproducible puzzle.
        #[clap(short, long)]
        seed: Option<u64>,

        /// Also print the completed board.
        #[clap(long)]
        solution: bool,
    },

    #[clap(about = "Solve a puzzle read from stdin (81 cells, '.' or '0' for blanks)")]
    Solve,
}
