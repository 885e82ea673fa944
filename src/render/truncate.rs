// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Caps oversized grids by substituting ellipsis bands for interior rows and columns.

use std::fmt;

use smallvec::SmallVec;

use crate::model::Grid;

use super::ELLIPSIS;

/// A dimension longer than this is truncated.
pub const MAX_UNTRUNCATED: usize = 10;
/// Rows/columns kept on each side of the ellipsis band.
pub const KEEP_EACH_SIDE: usize = 3;
/// Width of the inserted ellipsis band.
pub const ELLIPSIS_BAND: usize = 3;

/// A cell of a truncated grid: a borrowed input value or an inserted ellipsis.
#[derive(Debug)]
pub enum TruncatedCell<'a, T> {
    Value(&'a T),
    Ellipsis,
}

impl<T> Clone for TruncatedCell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TruncatedCell<'_, T> {}

impl<T: fmt::Display> fmt::Display for TruncatedCell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => fmt::Display::fmt(value, f),
            Self::Ellipsis => {
                use std::fmt::Write as _;
                f.write_char(ELLIPSIS)
            }
        }
    }
}

/// Source index for each visible position along one axis; `None` marks an ellipsis slot.
type Visible = SmallVec<[Option<usize>; 16]>;

fn visible_indices(len: usize) -> Visible {
    if len <= MAX_UNTRUNCATED {
        return (0..len).map(Some).collect();
    }

    (0..KEEP_EACH_SIDE)
        .map(Some)
        .chain(std::iter::repeat(None).take(ELLIPSIS_BAND))
        .chain((len - KEEP_EACH_SIDE..len).map(Some))
        .collect()
}

/// Returns a view of `grid` bounded to at most 9 visible rows and columns.
///
/// Rows are capped first, then columns; a cell is an ellipsis when either its row or its column
/// falls in a band. Grids at or below the threshold pass through unchanged in that dimension.
pub fn truncate<T>(grid: &Grid<T>) -> Grid<TruncatedCell<'_, T>> {
    let rows = visible_indices(grid.rows());
    let cols = visible_indices(grid.cols());

    if rows.len() != grid.rows() || cols.len() != grid.cols() {
        log::debug!(
            "truncating {}x{} grid to {}x{}",
            grid.rows(),
            grid.cols(),
            rows.len(),
            cols.len()
        );
    }

    Grid::from_fn(rows.len(), cols.len(), |r, c| match (rows[r], cols[c]) {
        (Some(r), Some(c)) => grid.get(r, c).map_or(TruncatedCell::Ellipsis, TruncatedCell::Value),
        _ => TruncatedCell::Ellipsis,
    })
}
