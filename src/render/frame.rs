// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Column spacing, padding and the bracket border around a normalized grid.

use super::normalize::{ColumnWidths, NormalizedGrid};
use super::{
    Canvas, CanvasError, BRACKET_BOTTOM_LEFT, BRACKET_BOTTOM_RIGHT, BRACKET_TOP_LEFT,
    BRACKET_TOP_RIGHT, BRACKET_VERTICAL, PAD,
};

/// Spaces, pads and borders a normalized grid.
///
/// The result is `rows + 2` high and `spaced width + 4` wide; even an empty grid yields the
/// two bracket rows around a two-column interior.
pub fn frame(normalized: &NormalizedGrid) -> Result<Canvas, CanvasError> {
    let spaced = space_columns(&normalized.canvas, &normalized.column_widths)?;
    let framed = border(&pad(&spaced)?)?;
    log::trace!("framed canvas is {}x{}", framed.width(), framed.height());
    Ok(framed)
}

/// Inserts one blank column between adjacent input columns.
///
/// `column_widths` partitions the canvas columns; characters of a single input column are
/// never separated.
pub fn space_columns(canvas: &Canvas, column_widths: &ColumnWidths) -> Result<Canvas, CanvasError> {
    let spacers = column_widths.len().saturating_sub(1);
    if spacers == 0 {
        return Ok(canvas.clone());
    }

    let width = canvas.width() + spacers;
    let mut out = Canvas::new(width, canvas.height())?;
    for y in 0..canvas.height() {
        let src = canvas.row(y)?;
        let mut src_x = 0;
        let mut dst_x = 0;
        for &column_width in column_widths {
            let cells = src.get(src_x..src_x + column_width).ok_or(CanvasError::OutOfBounds {
                x: src_x + column_width,
                y,
                width: canvas.width(),
                height: canvas.height(),
            })?;
            for (offset, &ch) in cells.iter().enumerate() {
                out.set(dst_x + offset, y, ch)?;
            }
            src_x += column_width;
            dst_x += column_width + 1;
        }
    }

    Ok(out)
}

/// Surrounds the canvas with one row of spaces above and below and one column on each side.
pub fn pad(canvas: &Canvas) -> Result<Canvas, CanvasError> {
    let mut out = Canvas::new_filled(canvas.width() + 2, canvas.height() + 2, PAD)?;
    out.blit(1, 1, canvas)?;
    Ok(out)
}

/// Adds a bracket column on each side: corners on the first and last row, bars in between.
pub fn border(canvas: &Canvas) -> Result<Canvas, CanvasError> {
    let height = canvas.height();
    let right = canvas.width() + 1;
    let mut out = Canvas::new(canvas.width() + 2, height)?;
    out.blit(1, 0, canvas)?;

    for y in 0..height {
        let (left_ch, right_ch) = if y == 0 {
            (BRACKET_TOP_LEFT, BRACKET_TOP_RIGHT)
        } else if y + 1 == height {
            (BRACKET_BOTTOM_LEFT, BRACKET_BOTTOM_RIGHT)
        } else {
            (BRACKET_VERTICAL, BRACKET_VERTICAL)
        };
        out.set(0, y, left_ch)?;
        out.set(right, y, right_ch)?;
    }

    Ok(out)
}
