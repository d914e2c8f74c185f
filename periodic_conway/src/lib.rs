//! Conway's Game of Life on a finite torus, and an exhaustive search for grid
//! sizes that admit oscillators.
//!
//! ```
//! use periodic_conway::{Grid, eventual_period, find_smallest_oscillating_width};
//!
//! let found = find_smallest_oscillating_width(3, 8).unwrap().unwrap();
//! assert_eq!((found.cols, found.period), (4, 2));
//!
//! let mut grid = Grid::new(3, found.cols).unwrap();
//! grid.from_compact(found.seed).unwrap();
//! assert_eq!(eventual_period(&mut grid).unwrap(), 2);
//! ```

pub mod error;
pub mod grid;
#[cfg(feature = "logging")]
pub mod logging;
pub mod patterns;
pub mod search;

pub use error::{Error, Result};
pub use grid::{Compact, Grid, Position};
pub use search::{
    OscillatingWidth, Oscillator, eventual_period, evolve_n_ticks, evolve_until_cycle,
    evolve_until_cycle_with, find_oscillator, find_smallest_oscillating_width,
    grid_size_has_oscillator, period_of,
};
