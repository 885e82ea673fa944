// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::model::Grid;

use super::text::{push_padded, text_len};
use super::{Canvas, CanvasError};

/// Character width of each input column, i.e. its longest stringified cell.
pub type ColumnWidths = SmallVec<[usize; 16]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedGrid {
    pub canvas: Canvas,
    pub column_widths: ColumnWidths,
}

/// Stringifies every cell and left-justifies it to its column's width.
///
/// A column of width `k` occupies exactly `k` canvas columns, with no spacing between input
/// columns yet.
pub fn normalize<T: fmt::Display>(grid: &Grid<T>) -> Result<NormalizedGrid, CanvasError> {
    // Zero-area grids (`0x5`, `3x0`) frame like `0x0`.
    let cols = if grid.is_empty() { 0 } else { grid.cols() };
    let texts = grid.iter_rows().flatten().map(ToString::to_string).collect::<Vec<_>>();

    let mut column_widths: ColumnWidths = smallvec![0; cols];
    for (idx, text) in texts.iter().enumerate() {
        let width = &mut column_widths[idx % cols];
        *width = (*width).max(text_len(text));
    }

    let width = column_widths.iter().sum::<usize>();
    let mut rows = Vec::<Vec<char>>::with_capacity(grid.rows());
    for row in texts.chunks(cols.max(1)) {
        let mut line = Vec::with_capacity(width);
        for (text, &column_width) in row.iter().zip(column_widths.iter()) {
            push_padded(&mut line, text, column_width);
        }
        rows.push(line);
    }

    let canvas = Canvas::from_rows(rows)?;
    log::trace!("normalized {}x{} grid to {}x{} canvas", grid.rows(), cols, width, canvas.height());

    Ok(NormalizedGrid { canvas, column_widths })
}
