mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, Read};
use toybox::{
    sudoku::{self, Grid},
    terminal_io, MaxHeap, Stack,
};
use tracing::{info, Level};
use tracing_subscriber::fmt;

use crate::cli::{Cli, CliCommand, SudokuCommand};

fn main() -> Result<()> {
    let args = Cli::parse();

    let format = fmt::format()
        .without_time()
        .with_level(true)
        .with_target(false)
        .compact();

    tracing_subscriber::fmt()
        .with_max_level(verbosity(args.verbose))
        .with_writer(io::stderr)
        .event_format(format)
        .init();

    match args.command {
        CliCommand::Stack { values } => run_stack(values),
        CliCommand::Heap { values } => run_heap(values),
        CliCommand::Sudoku { command } => match command {
            SudokuCommand::Generate {
                level,
                seed,
                solution,
            } => run_generate(level, seed, solution),
            SudokuCommand::Solve => run_solve(),
        },
    }
}

fn verbosity(count: u64) -> Level {
    match count {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn run_stack(values: Vec<String>) -> Result<()> {
    for line in stack_demo(values) {
        println!("{line}");
    }
    Ok(())
}

/// Push `values`, show the top, pop once, then drain down to the underflow
/// sentinel.
fn stack_demo(values: Vec<String>) -> Vec<String> {
    let mut stack = Stack::new();
    let mut lines = vec![format!("empty: {}", stack.is_empty())];

    stack.extend(values);
    lines.push(stack.to_string());

    if let Some(top) = stack.peek() {
        lines.push(format!("Top element is: {top}"));
    }
    lines.push(format!("Popped element: {}", stack.pop_or_underflow()));
    lines.push(stack.to_string());

    while !stack.is_empty() {
        lines.push(format!("pop -> {}", stack.pop_or_underflow()));
    }
    lines.push(format!("pop -> {}", stack.pop_or_underflow()));
    info!(size = stack.size(), "stack drained");

    lines
}

fn run_heap(values: Vec<i64>) -> Result<()> {
    let mut heap: MaxHeap<_> = values.into_iter().collect();
    println!("Max Heap: {:?}", heap.as_slice());
    println!("Extract Max: {}", heap.extract_max()?);
    println!("Max Heap after extracting max: {:?}", heap.as_slice());
    Ok(())
}

fn run_generate(level: sudoku::Level, seed: Option<u64>, solution: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let puzzle = sudoku::generate(level, &mut rng);
    let color = io::stdout().is_tty();
    terminal_io::render_puzzle(&mut io::stdout(), &puzzle, solution, color)
}

fn run_solve() -> Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let grid: Grid = input.parse().context("failed to read grid from stdin")?;
    info!(givens = grid.count_filled(), "read grid");

    let solved = sudoku::solve(&grid)?;
    let color = io::stdout().is_tty();
    terminal_io::render_grid(&mut io::stdout(), &solved, Some(&grid), color)
}
