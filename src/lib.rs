// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Prettymatrix: bracketed, column-aligned text rendering of matrices and matrix expressions.
//!
//! ```text
//! ┌     ┐   ┌   ┐
//! │ 1 3 │ . │ 5 │
//! │ 2 4 │   │ 6 │
//! └     ┘   └   ┘
//! W         x
//! ```
//!
//! Rendering is pure: every call builds and discards its own canvases, so renderers may be
//! called from any number of threads at once.

pub mod format;
pub mod model;
pub mod render;

pub use model::{Dimensions, Glyph, Grid, ShapeError};
pub use render::{
    glyph_to_string, render_expression, render_matrices, render_matrix, ArgumentError,
    RenderError, RenderOptions,
};
