// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input data types: grids of cell values and operator glyphs.

pub mod glyph;
pub mod grid;

pub use glyph::{Glyph, GlyphParseError};
pub use grid::{Dimensions, Grid, ShapeError};
