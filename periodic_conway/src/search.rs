// search.rs - Cycle detection and brute-force oscillator search

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::Result;
use crate::grid::{Compact, Grid};

/// A seed state whose trajectory settles into a cycle longer than one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Oscillator {
    pub seed: Compact,
    pub period: usize,
}

/// The narrowest grid, for a fixed row count, that admits an oscillator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OscillatingWidth {
    pub cols: usize,
    pub seed: Compact,
    pub period: usize,
    /// One full turn of the oscillator; first and last entries are equal.
    pub cycle: Vec<Compact>,
}

/// Runs exactly `ticks` steps, calling `observer` on the starting state and
/// after every step.
pub fn evolve_n_ticks(grid: &mut Grid, ticks: usize, mut observer: impl FnMut(&Grid)) {
    observer(grid);
    for _ in 0..ticks {
        grid.step();
        observer(grid);
    }
}

/// Steps `grid` until a state repeats. Returns every visited state in order,
/// starting with the current one and ending with the first repeat. Fails
/// before stepping if the grid has no compact form.
pub fn evolve_until_cycle(grid: &mut Grid) -> Result<Vec<Compact>> {
    evolve_until_cycle_with(grid, |_| {})
}

/// [`evolve_until_cycle`] with an observer that sees the starting state and
/// the grid after every step.
pub fn evolve_until_cycle_with(
    grid: &mut Grid,
    mut observer: impl FnMut(&Grid),
) -> Result<Vec<Compact>> {
    let mut seen = HashSet::new();
    let mut state = grid.to_compact()?;
    let mut states = vec![state];
    observer(grid);

    while seen.insert(state) {
        grid.step();
        state = grid.to_compact()?;
        states.push(state);
        observer(grid);
    }
    trace!(start = states[0], closing = state, len = states.len(), "cycle closed");
    Ok(states)
}

/// Steps from the last state of `states` back to its previous occurrence.
/// `None` if the sequence does not end on a repeated state.
pub fn period_of(states: &[Compact]) -> Option<usize> {
    let (&closing, earlier) = states.split_last()?;
    earlier
        .iter()
        .rev()
        .position(|&state| state == closing)
        .map(|steps| steps + 1)
}

/// Period of the cycle the current state eventually falls into; 1 for a
/// still life. Leaves `grid` at the state that closed the cycle.
pub fn eventual_period(grid: &mut Grid) -> Result<usize> {
    // evolve_until_cycle always ends on a repeated state
    Ok(period_of(&evolve_until_cycle(grid)?).unwrap_or(1))
}

/// Tries every state of `grid`'s size in ascending compact order and returns
/// the first whose eventual period exceeds 1. On success `grid` is left inside
/// the oscillator. Grids with no compact form fail with `TooManyCells`.
pub fn find_oscillator(grid: &mut Grid) -> Result<Option<Oscillator>> {
    for seed in 0..=grid.max_compact()? {
        grid.from_compact(seed)?;
        let period = eventual_period(grid)?;
        if period > 1 {
            debug!(rows = grid.rows(), cols = grid.cols(), seed, period, "oscillator found");
            return Ok(Some(Oscillator { seed, period }));
        }
    }
    debug!(rows = grid.rows(), cols = grid.cols(), "no oscillator");
    Ok(None)
}

/// Whether any `rows x cols` torus has an oscillator, by exhaustive search.
pub fn grid_size_has_oscillator(rows: usize, cols: usize) -> Result<bool> {
    let mut grid = Grid::new(rows, cols)?;
    Ok(find_oscillator(&mut grid)?.is_some())
}

/// Widens a `rows`-row torus one column at a time, up to `max_cols`, until an
/// oscillator exists.
pub fn find_smallest_oscillating_width(rows: usize, max_cols: usize) -> Result<Option<OscillatingWidth>> {
    for cols in 1..=max_cols {
        let mut grid = Grid::new(rows, cols)?;
        if let Some(Oscillator { seed, period }) = find_oscillator(&mut grid)? {
            let cycle = evolve_until_cycle(&mut grid)?;
            return Ok(Some(OscillatingWidth { cols, seed, period, cycle }));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn period_counts_back_to_previous_occurrence() {
        assert_eq!(period_of(&[5, 5]), Some(1));
        assert_eq!(period_of(&[1, 2, 3, 2]), Some(2));
        assert_eq!(period_of(&[9, 1, 2, 3, 1]), Some(3));
    }

    #[test]
    fn period_needs_a_repeat() {
        assert_eq!(period_of(&[]), None);
        assert_eq!(period_of(&[4]), None);
        assert_eq!(period_of(&[1, 2, 3]), None);
    }

    #[test]
    fn still_life_closes_after_one_step() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(evolve_until_cycle(&mut grid).unwrap(), vec![0, 0]);
        assert_eq!(eventual_period(&mut grid).unwrap(), 1);
    }

    #[test]
    fn transient_into_still_life_has_period_one() {
        // All alive on a 3x3 torus: every cell has 8 neighbors and dies.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.from_compact(grid.max_compact().unwrap()).unwrap();
        assert_eq!(evolve_until_cycle(&mut grid).unwrap(), vec![511, 0, 0]);
    }

    #[test]
    fn observer_sees_start_and_every_step() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.from_compact(19).unwrap();
        let mut seen = Vec::new();
        let states = evolve_until_cycle_with(&mut grid, |g| seen.push(g.to_compact().unwrap())).unwrap();
        assert_eq!(states, vec![19, 819, 3276, 819]);
        assert_eq!(seen, states);
    }

    #[test]
    fn eventual_period_leaves_grid_at_closing_state() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.from_compact(19).unwrap();
        assert_eq!(eventual_period(&mut grid).unwrap(), 2);
        assert_eq!(grid.to_compact().unwrap(), 819);
        assert_eq!(grid.generation(), 3);
    }

    #[test]
    fn evolve_n_ticks_reports_every_state() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.from_compact(819).unwrap();
        let mut seen = Vec::new();
        evolve_n_ticks(&mut grid, 4, |g| seen.push(g.to_compact().unwrap()));
        assert_eq!(seen, vec![819, 3276, 819, 3276, 819]);
    }

    #[test]
    fn find_oscillator_reports_first_seed() {
        let mut grid = Grid::new(3, 4).unwrap();
        assert_eq!(find_oscillator(&mut grid).unwrap(), Some(Oscillator { seed: 19, period: 2 }));
        assert_eq!(grid.to_compact().unwrap(), 819);

        let mut narrow = Grid::new(3, 3).unwrap();
        assert_eq!(find_oscillator(&mut narrow).unwrap(), None);
    }

    #[test]
    fn oversized_grid_cannot_be_searched() {
        let mut grid = Grid::new(5, 13).unwrap();
        let too_many = Error::TooManyCells { rows: 5, cols: 13, max: 64 };
        assert_eq!(find_oscillator(&mut grid), Err(too_many));
        assert_eq!(eventual_period(&mut grid), Err(too_many));
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid_size_has_oscillator(5, 13), Err(too_many));
    }
}
