use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::grid::Grid;

/// A named shape, as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom section (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// `(height, width)` of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(row, col)| (h.max(row + 1), w.max(col + 1)))
    }
}

pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clears the grid and stamps `pattern` with its corner at `origin`, wrapping
/// around the torus where it overhangs an edge.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern, origin: (usize, usize)) -> Result<()> {
    grid.clear();
    for &(row, col) in pattern.cells {
        let cell = ((origin.0 + row) % grid.rows(), (origin.1 + col) % grid.cols());
        grid.set_key(cell)?;
    }
    Ok(())
}

pub fn apply_random_pattern(grid: &mut Grid, seed_value: u64) -> Result<()> {
    grid.clear();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for index in 0..grid.cell_count() {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        if seed % 3 == 0 {
            grid.set_key(index)?; // ~33% chance of being alive
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::eventual_period;

    fn period(name: &str, rows: usize, cols: usize) -> usize {
        let mut grid = Grid::new(rows, cols).unwrap();
        apply_pattern(&mut grid, find_pattern(name).unwrap(), (1, 1)).unwrap();
        eventual_period(&mut grid).unwrap()
    }

    #[test]
    fn classic_shapes_keep_their_periods_on_a_torus() {
        assert_eq!(period("block", 4, 4), 1);
        assert_eq!(period("blinker", 5, 5), 2);
        assert_eq!(period("toad", 6, 6), 2);
        assert_eq!(period("beacon", 6, 6), 2);
        // 4 generations per diagonal cell, 8 cells around the torus
        assert_eq!(period("glider", 8, 8), 32);
    }

    #[test]
    fn blinker_stalls_on_a_cramped_torus() {
        assert_eq!(period("blinker", 3, 3), 1);
    }

    #[test]
    fn pattern_wraps_past_the_edge() {
        let mut grid = Grid::new(3, 4).unwrap();
        apply_pattern(&mut grid, find_pattern("Blinker").unwrap(), (2, 3)).unwrap();
        assert_eq!(grid.get((2, 3)).unwrap(), 1);
        assert_eq!(grid.get((2, 0)).unwrap(), 1);
        assert_eq!(grid.get((2, 1)).unwrap(), 1);
        assert_eq!(grid.live_cells(), 3);
    }

    #[test]
    fn random_pattern_is_reproducible() {
        let mut a = Grid::new(6, 6).unwrap();
        let mut b = Grid::new(6, 6).unwrap();
        apply_random_pattern(&mut a, 7).unwrap();
        apply_random_pattern(&mut b, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pulsar_returns_after_three_generations() {
        let mut grid = Grid::new(17, 17).unwrap();
        apply_pattern(&mut grid, find_pattern("pulsar").unwrap(), (2, 2)).unwrap();
        let start = grid.clone();
        assert_eq!(grid.live_cells(), 48);
        grid.step();
        assert_ne!(grid, start);
        grid.step();
        grid.step();
        assert_eq!(grid, start);
    }

    #[test]
    fn gosper_gun_fits_a_wide_torus() {
        let mut grid = Grid::new(12, 40).unwrap();
        apply_pattern(&mut grid, find_pattern("Gosper Glider Gun").unwrap(), (1, 1)).unwrap();
        assert_eq!(grid.live_cells(), 36);
        grid.step();
        assert_eq!(grid.live_cells(), 39);
    }

    #[test]
    fn extent_covers_every_cell() {
        assert_eq!(find_pattern("Block").unwrap().extent(), (2, 2));
        assert_eq!(find_pattern("Pulsar").unwrap().extent(), (13, 13));
        assert_eq!(find_pattern("Gosper Glider Gun").unwrap().extent(), (9, 36));
    }

    #[test]
    fn unknown_pattern_is_none() {
        assert!(find_pattern("Lightweight spaceship").is_none());
    }
}
