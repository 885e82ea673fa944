// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::PAD;

/// Control characters (`\n`, `\t`, ...) would break the one-char-per-cell layout; they render
/// as [`PAD`].
pub(crate) fn printable(ch: char) -> char {
    if ch.is_control() {
        PAD
    } else {
        ch
    }
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Writes `text` into `out`, right-padded with [`PAD`] to `width` characters.
pub(crate) fn push_padded(out: &mut Vec<char>, text: &str, width: usize) {
    let start = out.len();
    out.extend(text.chars().map(printable));
    let written = out.len() - start;
    out.extend(std::iter::repeat(PAD).take(width.saturating_sub(written)));
}
