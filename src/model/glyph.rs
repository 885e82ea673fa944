// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// An operator symbol placed between expression operands.
///
/// Glyphs are decorative: nothing is ever evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Glyph {
    Dot,
    Plus,
    Minus,
    Hadamard,
    Equals,
}

impl Glyph {
    pub const ALL: [Glyph; 5] =
        [Glyph::Dot, Glyph::Plus, Glyph::Minus, Glyph::Hadamard, Glyph::Equals];

    pub const fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Hadamard => '∘',
            Self::Equals => '=',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Hadamard => "hadamard",
            Self::Equals => "equals",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;
        f.write_char(self.as_char())
    }
}

impl FromStr for Glyph {
    type Err = GlyphParseError;

    /// Accepts either the printable glyph (`+`) or its name (`plus`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Glyph::ALL
            .into_iter()
            .find(|glyph| {
                let mut buf = [0u8; 4];
                token == glyph.as_char().encode_utf8(&mut buf) || token == glyph.name()
            })
            .ok_or_else(|| GlyphParseError { token: token.to_owned() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphParseError {
    pub token: String,
}

impl fmt::Display for GlyphParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operator glyph: {:?}", self.token)
    }
}

impl std::error::Error for GlyphParseError {}
