//! Bucket-uniformity quality check.
//!
//! Draws `range * per_bucket` values with [`RandomEngine::next_below`] and
//! verifies that every bucket count lies within `tolerance` (relative) of
//! the expected `per_bucket`. This is a smoke test for gross defects such as
//! stuck bits or a broken range reduction, not a substitute for external
//! statistical batteries.

use crate::engine::RandomEngine;
use crate::error::EngineError;

/// Maximum number of buckets accepted by [`UniformityCheck::new`].
pub const MAX_RANGE: u64 = 1 << 24;

/// Parameters of a bucket-uniformity check.
///
/// # Examples
///
/// ```rust
/// use randshow_core::quality::UniformityCheck;
/// use randshow_core::Pcg32;
///
/// let check = UniformityCheck::new(100, 1_000, 0.15).unwrap();
/// let report = check.run(&mut Pcg32::from_seed(1));
/// assert!(report.passed());
/// assert_eq!(report.total_draws(), 100_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformityCheck {
    range: u64,
    per_bucket: u64,
    tolerance: f64,
}

impl UniformityCheck {
    /// Creates a check over `range` buckets with `per_bucket` expected draws
    /// per bucket and a relative `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] if `range` is 0 or above
    /// [`MAX_RANGE`], `per_bucket` is 0 or makes the total draw count
    /// overflow, or `tolerance` is not in `(0, 1]`.
    pub fn new(range: u64, per_bucket: u64, tolerance: f64) -> Result<Self, EngineError> {
        if range == 0 || range > MAX_RANGE {
            return Err(EngineError::invalid_parameter(
                "range",
                format!("{} is outside [1, {}]", range, MAX_RANGE),
            ));
        }
        if per_bucket == 0 || range.checked_mul(per_bucket).is_none() {
            return Err(EngineError::invalid_parameter(
                "per_bucket",
                "must be positive and keep range * per_bucket within u64",
            ));
        }
        if !(tolerance > 0.0 && tolerance <= 1.0) {
            return Err(EngineError::invalid_parameter(
                "tolerance",
                format!("{} is outside (0, 1]", tolerance),
            ));
        }
        Ok(Self {
            range,
            per_bucket,
            tolerance,
        })
    }

    /// Returns the number of buckets.
    #[inline]
    pub fn range(&self) -> u64 {
        self.range
    }

    /// Returns the expected count per bucket.
    #[inline]
    pub fn per_bucket(&self) -> u64 {
        self.per_bucket
    }

    /// Returns the relative tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Runs the check against `engine`.
    pub fn run<E: RandomEngine + ?Sized>(&self, engine: &mut E) -> UniformityReport {
        let mut counts = vec![0u64; self.range as usize];
        for _ in 0..self.range * self.per_bucket {
            counts[engine.next_below(self.range) as usize] += 1;
        }

        let expected = self.per_bucket as f64;
        let margin = expected * self.tolerance;
        let report = UniformityReport {
            counts,
            expected,
            lower: expected - margin,
            upper: expected + margin,
        };

        tracing::debug!(
            range = self.range,
            per_bucket = self.per_bucket,
            tolerance = self.tolerance,
            worst_deviation = report.worst_deviation(),
            passed = report.passed(),
            "uniformity check finished"
        );
        report
    }
}

/// Outcome of a [`UniformityCheck`].
#[derive(Clone, Debug, PartialEq)]
pub struct UniformityReport {
    counts: Vec<u64>,
    expected: f64,
    lower: f64,
    upper: f64,
}

impl UniformityReport {
    /// Per-bucket counts, indexed by drawn value.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Expected count per bucket.
    pub fn expected(&self) -> f64 {
        self.expected
    }

    /// Accepted band `[lower, upper]` for every bucket count.
    pub fn band(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Total number of draws performed.
    pub fn total_draws(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Buckets whose count falls outside the accepted band.
    pub fn failing_buckets(&self) -> Vec<(u64, u64)> {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| !self.in_band(count))
            .map(|(bucket, &count)| (bucket as u64, count))
            .collect()
    }

    /// Largest relative deviation from the expected count over all buckets.
    pub fn worst_deviation(&self) -> f64 {
        self.counts
            .iter()
            .map(|&count| (count as f64 - self.expected).abs() / self.expected)
            .fold(0.0, f64::max)
    }

    /// Returns `true` when every bucket, including empty ones, is in band.
    pub fn passed(&self) -> bool {
        self.counts.iter().all(|&count| self.in_band(count))
    }

    fn in_band(&self, count: u64) -> bool {
        let count = count as f64;
        count >= self.lower && count <= self.upper
    }
}
