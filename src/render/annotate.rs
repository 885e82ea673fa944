// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Name and dimension rows beneath a framed matrix.

use crate::model::Dimensions;

use super::text::text_len;
use super::{Canvas, CanvasError};

/// Appends `text` as a new bottom row, left-justified.
///
/// When `text` is wider than the canvas every existing row gains trailing spaces; otherwise the
/// new row is padded. Empty `text` appends a blank row.
pub fn append_row(canvas: &Canvas, text: &str) -> Result<Canvas, CanvasError> {
    let width = canvas.width().max(text_len(text));
    let mut out = canvas.extend(width, canvas.height() + 1)?;
    out.write_str(0, canvas.height(), text)?;
    Ok(out)
}

/// Appends the name row (when `name` is non-empty) and then the `(RxC)` row (when given).
pub fn annotate(
    canvas: &Canvas,
    name: Option<&str>,
    dimensions: Option<Dimensions>,
) -> Result<Canvas, CanvasError> {
    let mut out = match name.filter(|name| !name.is_empty()) {
        Some(name) => append_row(canvas, name)?,
        None => canvas.clone(),
    };

    if let Some(dimensions) = dimensions {
        out = append_row(&out, &dimensions.to_string())?;
    }

    Ok(out)
}
