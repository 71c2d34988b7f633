//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell is empty or holds a letter.
//! Uses a flat row-major vector; the size is fixed at construction.
//! Coordinates: (row, col), both ranging 0..N.

use std::fmt;

use crate::error::BoardError;
use crate::types::{Cell, Coord, Letter, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// The game board - N x N cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
    /// Number of non-empty cells
    filled: usize,
}

impl Board {
    /// Create a new empty board of `size x size` cells
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            filled: 0,
        })
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        self.index(row, col).ok_or(BoardError::OutOfBounds {
            row,
            col,
            size: self.size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some()
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Non-failing lookup, `None` when out of bounds
    #[inline]
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        self.index(at.row, at.col).map(|idx| self.cells[idx])
    }

    /// Write a letter into (row, col)
    ///
    /// No occupancy check happens here; the game state enforces that.
    pub fn set(&mut self, row: usize, col: usize, letter: Letter) -> Result<(), BoardError> {
        self.write(row, col, Cell::Filled(letter))
    }

    /// Reset (row, col) to empty
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.write(row, col, Cell::Empty)
    }

    fn write(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let idx = self.checked_index(row, col)?;
        match (self.cells[idx].is_empty(), cell.is_empty()) {
            (true, false) => self.filled += 1,
            (false, true) => self.filled -= 1,
            _ => {}
        }
        self.cells[idx] = cell;
        Ok(())
    }

    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.get(row, col).map(|cell| cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    pub fn filled_count(&self) -> usize {
        self.filled
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(idx, _)| Coord::new(idx / size, idx % size))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start..start + self.size])
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.as_char())?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
