use std::{fmt, str::FromStr};

use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use super::Grid;
use crate::error::ParseLevelError;

/// Difficulty, measured by how many cells get blanked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Insane,
    Inhuman,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Easy,
        Level::Medium,
        Level::Hard,
        Level::VeryHard,
        Level::Insane,
        Level::Inhuman,
    ];

    pub fn cells_removed(self) -> usize {
        match self {
            Level::Easy => 29,
            Level::Medium => 38,
            Level::Hard => 47,
            Level::VeryHard => 56,
            Level::Insane => 65,
            Level::Inhuman => 74,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
            Level::VeryHard => "Very hard",
            Level::Insane => "Insane",
            Level::Inhuman => "Inhuman",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; accepts `very-hard`, `very_hard`, and `"very hard"`.
impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Level::ALL
            .into_iter()
            .find(|level| level.name().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub level: Level,
    /// The completed board.
    pub original: Grid,
    /// `original` with cells blanked out.
    pub question: Grid,
}

pub fn generate(level: Level, rng: &mut impl Rng) -> Puzzle {
    let original = fill(rng);
    let question = remove_cells(&original, level.cells_removed(), rng);
    debug!(%level, "generated puzzle");

    Puzzle {
        level,
        original,
        question,
    }
}

/// A random complete board.
pub fn fill(rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::empty();
    let filled = fill_from(&mut grid, rng);
    // The empty board always admits a completion.
    debug_assert!(filled);
    grid
}

fn fill_from(grid: &mut Grid, rng: &mut impl Rng) -> bool {
    let Some((row, col)) = grid.find_unassigned() else {
        return true;
    };

    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);

    for value in digits {
        if grid.is_safe(row, col, value) {
            grid.set(row, col, value);
            if fill_from(grid, rng) {
                return true;
            }
            grid.set(row, col, Grid::UNASSIGNED);
        }
    }
    false
}

/// Blank out `count` distinct filled cells, or all of them if there are fewer.
pub fn remove_cells(grid: &Grid, count: usize, rng: &mut impl Rng) -> Grid {
    let filled: Vec<(usize, usize)> = grid
        .positions()
        .filter(|&pos| grid[pos] != Grid::UNASSIGNED)
        .collect();

    let mut res = *grid;
    for &pos in filled.choose_multiple(rng, count) {
        res.set(pos.0, pos.1, Grid::UNASSIGNED);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::solve;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn filled_grid_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = fill(&mut rng);
        assert!(grid.is_full());
        assert!(grid.is_consistent());
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a = generate(Level::Hard, &mut StdRng::seed_from_u64(42));
        let b = generate(Level::Hard, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn levels_remove_expected_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        for level in Level::ALL {
            let puzzle = generate(level, &mut rng);
            assert_eq!(puzzle.level, level);
            assert_eq!(puzzle.question.count_filled(), 81 - level.cells_removed());

            // Every given agrees with the original board.
            for pos in puzzle.question.positions() {
                let given = puzzle.question[pos];
                assert!(given == Grid::UNASSIGNED || given == puzzle.original[pos]);
            }
        }
    }

    #[test]
    fn question_is_solvable() {
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = generate(Level::Medium, &mut rng);
        let solved = solve(&puzzle.question).unwrap();
        assert!(solved.is_full());
        assert!(solved.is_consistent());
    }

    #[test]
    fn removing_more_than_present_clears_everything() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = fill(&mut rng);
        assert_eq!(remove_cells(&grid, 100, &mut rng), Grid::empty());
        assert_eq!(remove_cells(&grid, 0, &mut rng), grid);
    }

    #[test]
    fn level_names() {
        assert_eq!(Level::VeryHard.to_string(), "Very hard");
        assert_eq!("very-hard".parse::<Level>(), Ok(Level::VeryHard));
        assert_eq!("Very hard".parse::<Level>(), Ok(Level::VeryHard));
        assert_eq!("INHUMAN".parse::<Level>(), Ok(Level::Inhuman));
        assert_eq!(
            "trivial".parse::<Level>(),
            Err(ParseLevelError("trivial".to_string()))
        );
    }
}
