// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for matrices, matrix sequences and expressions.
//!
//! Every stage reads a [`Canvas`] (or the input grid) and returns a new one:
//! truncate -> normalize -> frame -> annotate, then compose for multi-matrix output.

use std::fmt;

pub mod annotate;
pub mod compose;
pub mod frame;
pub mod matrix;
pub mod normalize;
mod text;
pub mod truncate;

pub use matrix::{
    glyph_to_string, render_expression, render_matrices, render_matrix, ArgumentError,
    RenderError,
};

pub const PAD: char = ' ';
pub const ELLIPSIS: char = '…';
pub const BRACKET_VERTICAL: char = '│';
pub const BRACKET_TOP_LEFT: char = '┌';
pub const BRACKET_TOP_RIGHT: char = '┐';
pub const BRACKET_BOTTOM_LEFT: char = '└';
pub const BRACKET_BOTTOM_RIGHT: char = '┘';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Append a `(RxC)` row with the pre-truncation shape beneath each matrix.
    pub include_dimensions: bool,
}

impl RenderOptions {
    pub fn with_dimensions() -> Self {
        Self { include_dimensions: true }
    }
}

/// A fixed-size, bounds-checked character grid.
///
/// Every row has the same width; stages that change the size build a new canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, PAD)
    }

    /// Creates a new canvas filled with `fill`.
    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self { width, height, cells: vec![fill; len] })
    }

    /// Creates a canvas from explicit rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, CanvasError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((row, found)) =
            rows.iter().map(Vec::len).enumerate().find(|&(_, len)| len != width)
        {
            return Err(CanvasError::RaggedRows { row, expected: width, found });
        }

        let height = rows.len();
        Ok(Self { width, height, cells: rows.into_iter().flatten().collect() })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the character at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx])
    }

    /// Returns row `y` as a slice of characters.
    pub fn row(&self, y: usize) -> Result<&[char], CanvasError> {
        if y >= self.height {
            return Err(self.out_of_bounds(0, y));
        }
        let start = y * self.width;
        Ok(&self.cells[start..start + self.width])
    }

    /// Sets the character at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Writes `text` left-to-right starting at `(x, y)`.
    ///
    /// Behavior:
    /// - If `y` is out of bounds: returns an error.
    /// - If `text` exceeds the row: clips at the right edge.
    /// - Control characters are written as [`PAD`].
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }

        let mut x = x;
        for ch in text.chars() {
            if x >= self.width {
                break;
            }
            self.set(x, y, text::printable(ch))?;
            x += 1;
        }

        Ok(())
    }

    /// Copies `other` onto this canvas with its top-left corner at `(x, y)`.
    ///
    /// The whole of `other` must fit; nothing is written otherwise.
    pub fn blit(&mut self, x: usize, y: usize, other: &Canvas) -> Result<(), CanvasError> {
        if other.width == 0 || other.height == 0 {
            return Ok(());
        }

        let max_x = x.saturating_add(other.width - 1);
        let max_y = y.saturating_add(other.height - 1);
        if !self.in_bounds(max_x, max_y) {
            return Err(self.out_of_bounds(max_x, max_y));
        }

        for row in 0..other.height {
            let src = row * other.width;
            let dst = ((y + row) * self.width) + x;
            self.cells[dst..dst + other.width]
                .copy_from_slice(&other.cells[src..src + other.width]);
        }

        Ok(())
    }

    /// Returns a copy grown to at least `width x height`, filling new cells with spaces.
    ///
    /// Existing content stays anchored at the top-left; the canvas never shrinks.
    pub fn extend(&self, width: usize, height: usize) -> Result<Self, CanvasError> {
        let width = width.max(self.width);
        let height = height.max(self.height);
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }

        let mut out = Self::new(width, height)?;
        out.blit(0, 0, self)?;
        Ok(out)
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }

        Ok((y * self.width) + x)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CanvasError {
        CanvasError::OutOfBounds { x, y, width: self.width, height: self.height }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            let start = y * self.width;
            for &ch in &self.cells[start..start + self.width] {
                f.write_char(ch)?;
            }

            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
            Self::RaggedRows { row, expected, found } => {
                write!(f, "ragged canvas: row {row} has {found} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
