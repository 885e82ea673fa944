// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// A rectangular, immutable, row-major grid of cell values.
///
/// Every rendering stage reads a `Grid` and produces new values; nothing ever mutates the input.
/// A grid whose rows are all empty (e.g. `[[]]`) is the `0x0` grid. Grids built with an explicit
/// shape keep it even when it has no cells (`from_fn(0, 5, ..)` is `0x5`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid from nested rows, rejecting ragged input.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((row, found)) =
            rows.iter().map(Vec::len).enumerate().find(|&(_, len)| len != expected)
        {
            return Err(ShapeError { row, expected, found });
        }

        if expected == 0 {
            return Ok(Self::empty());
        }

        let row_count = rows.len();
        let cells = rows.into_iter().flatten().collect::<Vec<_>>();
        Ok(Self { rows: row_count, cols: expected, cells })
    }

    pub fn empty() -> Self {
        Self { rows: 0, cols: 0, cells: Vec::new() }
    }

    /// Builds a `rows x cols` grid by calling `f(row, col)` for each cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        if rows == 0 || cols == 0 {
            return Self { rows, cols, cells: Vec::new() };
        }

        let mut cells = Vec::with_capacity(rows.saturating_mul(cols));
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions { rows: self.rows, cols: self.cols }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get((row * self.cols) + col)
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.cells.get(start..start + self.cols)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `chunks_exact(0)` panics; an empty grid simply has no rows.
        self.cells.chunks_exact(self.cols.max(1))
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self::from_fn(rows, cols, |_, _| value.clone())
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = ShapeError;

    fn try_from(value: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Row and column counts of a grid, displayed as `(RxC)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = itoa::Buffer::new();
        let mut cols = itoa::Buffer::new();
        f.write_str("(")?;
        f.write_str(rows.format(self.rows))?;
        f.write_str("x")?;
        f.write_str(cols.format(self.cols))?;
        f.write_str(")")
    }
}

/// The first row whose length disagrees with the first row of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid is not rectangular: row {} has {} cells, expected {}",
            self.row, self.found, self.expected
        )
    }
}

impl std::error::Error for ShapeError {}
