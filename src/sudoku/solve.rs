use tracing::debug;

use super::Grid;
use crate::error::GridError;

/// Fill every empty cell, trying digits in ascending order.
pub fn solve(grid: &Grid) -> Result<Grid, GridError> {
    if !grid.is_consistent() {
        return Err(GridError::Unsolvable);
    }

    let mut work = *grid;
    let mut steps = 0u64;
    if backtrack(&mut work, &mut steps) {
        debug!(steps, "solved grid");
        Ok(work)
    } else {
        debug!(steps, "grid has no solution");
        Err(GridError::Unsolvable)
    }
}

pub fn is_solvable(grid: &Grid) -> bool {
    solve(grid).is_ok()
}

fn backtrack(grid: &mut Grid, steps: &mut u64) -> bool {
    let Some((row, col)) = grid.find_unassigned() else {
        return true;
    };

    for value in 1..=9 {
        if grid.is_safe(row, col, value) {
            *steps += 1;
            grid.set(row, col, value);
            if backtrack(grid, steps) {
                return true;
            }
            grid.set(row, col, Grid::UNASSIGNED);
        }
    }
    false
}
