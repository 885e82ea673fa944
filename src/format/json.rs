// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON documents describing a matrix, a matrix sequence or an expression.
//!
//! Accepted shapes:
//! - `[["1", 2], [3, 4]]`: a single grid
//! - `{ "operands": [...], "operators": ["+"], "names": ["A", "B"], "dimensions": true }`
//!
//! String cells render verbatim; any other JSON value renders as its compact JSON text.
//!
//! A single label (the document's `"name"`, else the caller's `name`) only applies to a document
//! holding exactly one operand with no `"names"` list. With several operands, or when `"names"`
//! is present, labels come from `"names"` alone.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{Glyph, GlyphParseError, Grid, ShapeError};
use crate::render::{
    render_expression, render_matrices, render_matrix, RenderError, RenderOptions,
};

type RawGrid = Vec<Vec<Value>>;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Grid(RawGrid),
    Expression(ExpressionDocument),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExpressionDocument {
    #[serde(default)]
    operands: Vec<RawGrid>,
    #[serde(default)]
    operators: Vec<String>,
    #[serde(default)]
    names: Option<Vec<String>>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    dimensions: bool,
}

#[derive(Debug)]
pub enum InputError {
    Json(serde_json::Error),
    Shape { operand: usize, source: ShapeError },
    Glyph(GlyphParseError),
    Render(RenderError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid JSON input: {err}"),
            Self::Shape { operand, source } => write!(f, "operand {operand}: {source}"),
            Self::Glyph(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "render error: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Shape { source, .. } => Some(source),
            Self::Glyph(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<GlyphParseError> for InputError {
    fn from(value: GlyphParseError) -> Self {
        Self::Glyph(value)
    }
}

impl From<RenderError> for InputError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

/// Parses `src` and renders it.
///
/// `name` labels a lone grid that carries no name of its own; it is ignored for multi-operand
/// documents and for documents with a `"names"` list. The document's `"dimensions"` flag
/// is OR-ed with `options`.
pub fn render_json(
    src: &str,
    name: Option<&str>,
    options: RenderOptions,
) -> Result<String, InputError> {
    match serde_json::from_str::<Document>(src)? {
        Document::Grid(raw) => {
            let grid = to_grid(raw, 0)?;
            Ok(render_matrix(&grid, name, options)?)
        }
        Document::Expression(doc) => render_document(doc, name, options),
    }
}

fn render_document(
    doc: ExpressionDocument,
    name: Option<&str>,
    options: RenderOptions,
) -> Result<String, InputError> {
    let options =
        RenderOptions { include_dimensions: options.include_dimensions || doc.dimensions };
    let operators =
        doc.operators.iter().map(|op| op.parse::<Glyph>()).collect::<Result<Vec<_>, _>>()?;
    let operands = doc
        .operands
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| to_grid(raw, idx))
        .collect::<Result<Vec<_>, _>>()?;
    let names =
        doc.names.as_ref().map(|names| names.iter().map(String::as_str).collect::<Vec<_>>());
    let names = names.as_deref();

    log::debug!(
        "rendering JSON document with {} operands and {} operators",
        operands.len(),
        operators.len()
    );

    let rendered = match (operands.as_slice(), operators.is_empty(), names) {
        ([grid], true, None) => render_matrix(grid, doc.name.as_deref().or(name), options)?,
        (_, true, _) => render_matrices(&operands, names, options)?,
        (_, false, _) => render_expression(&operands, &operators, names, options)?,
    };
    Ok(rendered)
}

fn to_grid(raw: RawGrid, operand: usize) -> Result<Grid<String>, InputError> {
    let rows = raw.into_iter().map(|row| row.into_iter().map(cell_text).collect()).collect();
    Grid::new(rows).map_err(|source| InputError::Shape { operand, source })
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
