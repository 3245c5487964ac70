//! Histogram command implementation
//!
//! Draws integers from a half-open range and prints how often each value
//! occurred, one `value count` pair per line in ascending value order.

use randshow_core::RandomEngine;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::info;

use crate::{CliError, Result};

/// Run the histogram command
pub fn run<E, W>(engine: &mut E, low: i64, high: i64, draws: u64, out: &mut W) -> Result<()>
where
    E: RandomEngine + ?Sized,
    W: Write,
{
    if low >= high {
        return Err(CliError::invalid_argument(format!(
            "low ({}) must be below high ({})",
            low, high
        )));
    }

    info!(low, high, draws, "drawing histogram");

    let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
    for _ in 0..draws {
        *counts.entry(engine.next_in(low, high)).or_insert(0) += 1;
    }

    for (value, count) in &counts {
        writeln!(out, "{} {}", value, count)?;
    }

    info!(distinct = counts.len(), "histogram complete");
    Ok(())
}
