// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{Glyph, Grid};

use super::annotate::annotate;
use super::compose::{compose, Panel, Term};
use super::frame::frame;
use super::normalize::normalize;
use super::truncate::truncate;
use super::{Canvas, CanvasError, RenderOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    NameCount { names: usize, operands: usize },
    OperatorCount { operators: usize, operands: usize },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameCount { names, operands } => {
                write!(f, "got {names} names for {operands} matrices")
            }
            Self::OperatorCount { operators, operands } => {
                write!(f, "got {operators} operators for {operands} operands")
            }
        }
    }
}

impl std::error::Error for ArgumentError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    Argument(ArgumentError),
    Canvas(CanvasError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(err) => write!(f, "invalid arguments: {err}"),
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Argument(err) => Some(err),
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<ArgumentError> for RenderError {
    fn from(value: ArgumentError) -> Self {
        Self::Argument(value)
    }
}

impl From<CanvasError> for RenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

/// Truncates, normalizes and frames `grid`; no annotations.
pub fn frame_grid<T: fmt::Display>(grid: &Grid<T>) -> Result<Canvas, CanvasError> {
    let truncated = truncate(grid);
    let normalized = normalize(&truncated)?;
    frame(&normalized)
}

/// Renders a single bracketed matrix, optionally labelled beneath with `name` and `(RxC)`.
///
/// e.g.
///
/// ```text
/// ┌     ┐
/// │ 1 3 │
/// │ 2 4 │
/// └     ┘
/// M_x
/// (2x2)
/// ```
pub fn render_matrix<T: fmt::Display>(
    grid: &Grid<T>,
    name: Option<&str>,
    options: RenderOptions,
) -> Result<String, RenderError> {
    let framed = frame_grid(grid)?;
    let dimensions = options.include_dimensions.then(|| grid.dimensions());
    Ok(annotate(&framed, name, dimensions)?.to_string())
}

/// Renders `grids` side by side. An empty string in `names` leaves that matrix unnamed.
pub fn render_matrices<T: fmt::Display>(
    grids: &[Grid<T>],
    names: Option<&[&str]>,
    options: RenderOptions,
) -> Result<String, RenderError> {
    check_name_count(names, grids.len())?;

    let terms = grids
        .iter()
        .enumerate()
        .map(|(idx, grid)| panel(grid, names, idx, options).map(Term::Matrix))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(compose(&terms)?.to_string())
}

/// Renders `operands` interleaved with `operators`, which must number one fewer.
///
/// With no operands a single operator renders as its bare glyph.
pub fn render_expression<T: fmt::Display>(
    operands: &[Grid<T>],
    operators: &[Glyph],
    names: Option<&[&str]>,
    options: RenderOptions,
) -> Result<String, RenderError> {
    check_name_count(names, operands.len())?;

    match (operands.len(), operators) {
        (0, []) => return Ok(String::new()),
        (0, [glyph]) => return Ok(glyph_to_string(*glyph)),
        (n, _) if operators.len() + 1 == n => {}
        (n, _) => {
            return Err(ArgumentError::OperatorCount { operators: operators.len(), operands: n }
                .into())
        }
    }

    let mut terms = Vec::<Term<'_>>::with_capacity(operands.len() + operators.len());
    for (idx, grid) in operands.iter().enumerate() {
        if idx > 0 {
            terms.push(Term::Operator(operators[idx - 1]));
        }
        terms.push(Term::Matrix(panel(grid, names, idx, options)?));
    }

    Ok(compose(&terms)?.to_string())
}

pub fn glyph_to_string(glyph: Glyph) -> String {
    glyph.to_string()
}

fn check_name_count(names: Option<&[&str]>, operands: usize) -> Result<(), ArgumentError> {
    match names {
        Some(names) if names.len() != operands => {
            Err(ArgumentError::NameCount { names: names.len(), operands })
        }
        _ => Ok(()),
    }
}

fn panel<'a, T: fmt::Display>(
    grid: &Grid<T>,
    names: Option<&[&'a str]>,
    idx: usize,
    options: RenderOptions,
) -> Result<Panel<'a>, CanvasError> {
    Ok(Panel {
        body: frame_grid(grid)?,
        name: names.and_then(|names| names.get(idx).copied()),
        dimensions: options.include_dimensions.then(|| grid.dimensions()),
    })
}
