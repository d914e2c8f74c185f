// grid.rs - Periodic (toroidal) grid for Conway's Game of Life

use std::fmt;

use crate::error::{Error, Result};

pub const MAX_CELLS: usize = u64::BITS as usize; // Compact states are u64 bit patterns
pub const LIVE_GLYPH: char = '█';
pub const DEAD_GLYPH: char = '.';

/// A whole grid configuration packed as a big-endian, row-major bit pattern.
pub type Compact = u64;

/// Flat indices of the 8 periodic neighbors of one cell.
pub type TNeighbors = [usize; 8];

// Row-major neighbor order: the row above, the same row, the row below
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A cell address, either a flat row-major index or a `(row, col)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Index(usize),
    Coord(usize, usize),
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Position::Index(index)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::Coord(row, col)
    }
}

/// Conway's Game of Life on an `rows x cols` torus: the first row neighbors the
/// last row and the first column neighbors the last column.
///
/// The neighbor table is computed once in [`Grid::new`] and shared by every
/// [`Grid::step`]. Cells are stored row-major, so flat index `k` is the cell
/// `(k / cols, k % cols)`.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    current: Vec<bool>,
    next: Vec<bool>,
    neighbors: Vec<TNeighbors>,
    generation: u32,
}

impl Grid {
    /// Creates an all-dead grid. Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid { rows, cols });
        }
        let cells = rows * cols;

        Ok(Self {
            rows,
            cols,
            current: vec![false; cells],
            next: vec![false; cells],
            neighbors: periodic_neighbors(rows, cols),
            generation: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.current.len()
    }

    /// Steps taken since the grid was last loaded or cleared.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Row-major cell states.
    pub fn cells(&self) -> &[bool] {
        &self.current
    }

    pub fn live_cells(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    pub fn get(&self, position: impl Into<Position>) -> Result<u8> {
        let index = self.index(position.into())?;
        Ok(u8::from(self.current[index]))
    }

    /// Sets one cell to `value`, which must be 0 or 1.
    pub fn set(&mut self, position: impl Into<Position>, value: u8) -> Result<()> {
        let alive = cell_value(value)?;
        let index = self.index(position.into())?;
        self.current[index] = alive;
        Ok(())
    }

    /// Marks one cell alive.
    pub fn set_key(&mut self, position: impl Into<Position>) -> Result<()> {
        self.set(position, 1)
    }

    /// The 8 periodic neighbors of a cell as `(row, col)` pairs, in row-major
    /// offset order. On small grids the same cell can appear more than once.
    pub fn neighbors(&self, position: impl Into<Position>) -> Result<[(usize, usize); 8]> {
        let index = self.index(position.into())?;
        Ok(self.neighbors[index].map(|n| (n / self.cols, n % self.cols)))
    }

    pub fn count_neighbors(&self, position: impl Into<Position>) -> Result<usize> {
        let index = self.index(position.into())?;
        Ok(self.live_neighbors(index))
    }

    /// Sets all 8 periodic neighbors of a cell to `value`.
    pub fn set_neighbors(&mut self, position: impl Into<Position>, value: u8) -> Result<()> {
        let alive = cell_value(value)?;
        let index = self.index(position.into())?;
        for &n in &self.neighbors[index] {
            self.current[n] = alive;
        }
        Ok(())
    }

    /// Advances one generation. The next generation is built from the current
    /// one in a separate buffer and swapped in whole.
    pub fn step(&mut self) {
        for index in 0..self.current.len() {
            let count = self.live_neighbors(index);
            self.next[index] = match (self.current[index], count) {
                (true, 2) | (true, 3) => true,   // Survival
                (false, 3)            => true,   // Birth
                _                     => false,  // Death or stays dead
            };
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.current.fill(false);
        self.generation = 0;
    }

    /// Whether the whole grid fits in one [`Compact`] state.
    pub fn is_compactable(&self) -> bool {
        self.cell_count() <= MAX_CELLS
    }

    /// Encodes the grid as an integer in `0..=max_compact()`. The first cell
    /// scanned is the most significant bit. Grids over [`MAX_CELLS`] cells
    /// have no compact form.
    pub fn to_compact(&self) -> Result<Compact> {
        self.compact_cells()?;
        Ok(self
            .current
            .iter()
            .fold(0, |acc, &alive| (acc << 1) | Compact::from(alive)))
    }

    /// Loads the state encoded by [`Grid::to_compact`]. Values wider than the
    /// grid's cell count are rejected rather than truncated.
    pub fn from_compact(&mut self, value: Compact) -> Result<()> {
        let cells = self.cell_count();
        if value > self.max_compact()? {
            return Err(Error::CompactOverflow { value, cells });
        }
        for (k, cell) in self.current.iter_mut().enumerate() {
            *cell = (value >> (cells - 1 - k)) & 1 == 1;
        }
        self.generation = 0;
        Ok(())
    }

    /// The all-alive state, `2^cells - 1`.
    pub fn max_compact(&self) -> Result<Compact> {
        let cells = self.compact_cells()?;
        Ok(Compact::MAX >> (MAX_CELLS - cells))
    }

    fn compact_cells(&self) -> Result<usize> {
        if !self.is_compactable() {
            return Err(Error::TooManyCells {
                rows: self.rows,
                cols: self.cols,
                max: MAX_CELLS,
            });
        }
        Ok(self.cell_count())
    }

    fn live_neighbors(&self, index: usize) -> usize {
        self.neighbors[index]
            .iter()
            .filter(|&&n| self.current[n])
            .count()
    }

    fn index(&self, position: Position) -> Result<usize> {
        let out_of_bounds = Error::OutOfBounds {
            position,
            rows: self.rows,
            cols: self.cols,
        };
        match position {
            Position::Index(k) if k < self.cell_count() => Ok(k),
            Position::Coord(row, col) if row < self.rows && col < self.cols => {
                Ok(row * self.cols + col)
            }
            _ => Err(out_of_bounds),
        }
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.current == other.current
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.current.chunks(self.cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &alive) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if alive { LIVE_GLYPH } else { DEAD_GLYPH })?;
            }
        }
        Ok(())
    }
}

fn cell_value(value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(Error::InvalidCellValue(value)),
    }
}

fn periodic_neighbors(rows: usize, cols: usize) -> Vec<TNeighbors> {
    let wrap = |i: usize, d: isize, n: usize| (i as isize + d).rem_euclid(n as isize) as usize;
    (0..rows * cols)
        .map(|k| {
            let (row, col) = (k / cols, k % cols);
            OFFSETS.map(|(dr, dc)| wrap(row, dr, rows) * cols + wrap(col, dc, cols))
        })
        .collect()
}
