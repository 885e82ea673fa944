// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Left-to-right composition of framed matrices and operator glyphs.

use crate::model::{Dimensions, Glyph};

use super::annotate::append_row;
use super::{Canvas, CanvasError};

/// Blank columns between adjacent terms.
pub const TERM_GAP: usize = 1;

/// A framed matrix and the labels that belong beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel<'a> {
    pub body: Canvas,
    pub name: Option<&'a str>,
    pub dimensions: Option<Dimensions>,
}

impl Panel<'_> {
    fn name(&self) -> Option<&str> {
        self.name.filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term<'a> {
    Matrix(Panel<'a>),
    Operator(Glyph),
}

impl Term<'_> {
    fn body_height(&self) -> Option<usize> {
        match self {
            Self::Matrix(panel) => Some(panel.body.height()),
            Self::Operator(_) => None,
        }
    }
}

/// Joins `terms` left to right with [`TERM_GAP`] blank columns between neighbours.
///
/// Layout:
/// - matrix bodies are top-aligned and padded at the bottom to the tallest body
/// - label bands follow: a name row if any matrix is named, then a dimensions row if any matrix
///   carries dimensions; each label is left-aligned under its own matrix and a matrix may widen
///   its column to fit its label
/// - an operator sits on the middle row of the taller of its neighbouring matrices, favouring
///   the upper row when that height is even (an operator between two bare `0x0` brackets shares
///   their top row)
pub fn compose(terms: &[Term<'_>]) -> Result<Canvas, CanvasError> {
    let body_height = terms.iter().filter_map(Term::body_height).max().unwrap_or(0);
    let panels = || {
        terms.iter().filter_map(|term| match term {
            Term::Matrix(panel) => Some(panel),
            Term::Operator(_) => None,
        })
    };
    let name_band = panels().any(|panel| panel.name().is_some());
    let dimensions_band = panels().any(|panel| panel.dimensions.is_some());
    let height = (body_height + usize::from(name_band) + usize::from(dimensions_band)).max(1);

    let mut columns = Vec::<Canvas>::with_capacity(terms.len());
    for (idx, term) in terms.iter().enumerate() {
        let column = match term {
            Term::Matrix(panel) => {
                let mut column = panel.body.extend(0, body_height)?;
                if name_band {
                    column = append_row(&column, panel.name().unwrap_or_default())?;
                }
                if dimensions_band {
                    let label = panel.dimensions.map(|d| d.to_string()).unwrap_or_default();
                    column = append_row(&column, &label)?;
                }
                column
            }
            Term::Operator(glyph) => {
                let mut column = Canvas::new(1, height)?;
                column.set(0, operator_row(terms, idx), glyph.as_char())?;
                column
            }
        };
        columns.push(column);
    }

    let width = columns.iter().map(Canvas::width).sum::<usize>()
        + TERM_GAP * columns.len().saturating_sub(1);
    let mut out = Canvas::new(width, if columns.is_empty() { 0 } else { height })?;
    let mut x = 0;
    for column in &columns {
        out.blit(x, 0, column)?;
        x += column.width() + TERM_GAP;
    }

    log::debug!("composed {} terms into a {}x{} canvas", terms.len(), out.width(), out.height());
    Ok(out)
}

fn operator_row(terms: &[Term<'_>], idx: usize) -> usize {
    let left = idx.checked_sub(1).and_then(|i| terms.get(i)).and_then(Term::body_height);
    let right = terms.get(idx + 1).and_then(Term::body_height);
    let span = left.max(right).unwrap_or(1).max(1);
    (span - 1) / 2
}
