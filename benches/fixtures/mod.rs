// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use prettymatrix::Grid;

fn cell_text(row: usize, col: usize, long_cells: bool) -> String {
    let seed = (row.wrapping_mul(31) ^ col.wrapping_mul(17)) % 1000;
    if long_cells {
        format!("{}.{:03}e-{}", seed % 10, seed, (row + col) % 12)
    } else {
        seed.to_string()
    }
}

pub mod matrix {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub rows: usize,
        pub cols: usize,
        pub long_cells: bool,
    }

    impl Params {
        pub const fn new(rows: usize, cols: usize, long_cells: bool) -> Self {
            Self { rows, cols, long_cells }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        SmallLongCells,
        AtThreshold,
        Truncated,
        HugeTruncated,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::SmallLongCells => "small_long_cells",
                Self::AtThreshold => "at_threshold",
                Self::Truncated => "truncated",
                Self::HugeTruncated => "huge_truncated",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(3, 3, false),
                Self::SmallLongCells => Params::new(3, 3, true),
                Self::AtThreshold => Params::new(10, 10, true),
                Self::Truncated => Params::new(11, 11, true),
                Self::HugeTruncated => Params::new(500, 500, true),
            }
        }
    }

    pub fn fixture(case: Case) -> Grid<String> {
        let params = case.params();
        Grid::from_fn(params.rows, params.cols, |r, c| cell_text(r, c, params.long_cells))
    }
}

pub mod expression {
    use super::*;

    use prettymatrix::Glyph;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        TwoOperands,
        LongChain,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::TwoOperands => "two_operands",
                Self::LongChain => "long_chain",
            }
        }

        const fn operand_count(self) -> usize {
            match self {
                Self::TwoOperands => 2,
                Self::LongChain => 16,
            }
        }
    }

    pub struct Fixture {
        pub operands: Vec<Grid<String>>,
        pub operators: Vec<Glyph>,
        pub names: Vec<String>,
    }

    pub fn fixture(case: Case) -> Fixture {
        let count = case.operand_count();
        let operands = (0..count)
            .map(|idx| {
                let rows = 2 + (idx % 5);
                let cols = 1 + (idx % 3);
                Grid::from_fn(rows, cols, |r, c| cell_text(r + idx, c, idx % 2 == 0))
            })
            .collect();
        let operators =
            (0..count.saturating_sub(1)).map(|idx| Glyph::ALL[idx % Glyph::ALL.len()]).collect();
        let names = (0..count).map(|idx| format!("M_{idx}")).collect();
        Fixture { operands, operators, names }
    }
}
