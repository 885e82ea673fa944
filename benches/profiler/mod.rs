// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Reads `PRETTYMATRIX_BENCH_<key>`, falling back to `default` when unset or unparsable.
fn knob<T: FromStr + Ord>(key: &str, default: T, min: T, max: T) -> T {
    std::env::var(format!("PRETTYMATRIX_BENCH_{key}"))
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Criterion config with a pprof flamegraph attached (`--profile-time <secs>` to record).
pub fn criterion() -> Criterion {
    let frequency = knob::<i32>("PROFILE_FREQ", 199, 1, 1000);
    let samples = knob::<usize>("SAMPLES", 50, 10, 500);
    let warm_up = knob::<u64>("WARMUP_SECS", 2, 1, 30);
    let measure = knob::<u64>("MEASURE_SECS", 4, 1, 120);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(warm_up))
        .measurement_time(Duration::from_secs(measure))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
