//! Cumulative probability table shared by the discrete distributions.

use crate::error::DistributionError;

/// Largest support accepted by a [`CumulativeTable`].
pub const MAX_SUPPORT: u64 = 1 << 26;

/// Normalised cumulative distribution over `len` support points.
///
/// The last entry is exactly 1.0, so searching for any `z` in `(0, 1)`
/// always finds a point even when rounding leaves the running sum short.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CumulativeTable {
    cdf: Vec<f64>,
}

impl CumulativeTable {
    /// Builds the table from `len` unnormalised, positive `weights`.
    pub(crate) fn from_weights<I>(len: u64, weights: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = f64>,
    {
        if len == 0 {
            return Err(DistributionError::invalid_parameter(
                "support",
                "must contain at least one value",
            ));
        }
        if len > MAX_SUPPORT {
            return Err(DistributionError::SupportTooLarge {
                len,
                max: MAX_SUPPORT,
            });
        }
        Ok(Self::build(weights))
    }

    /// Builds the table without checking the support size.
    pub(crate) fn build<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut cdf: Vec<f64> = weights
            .into_iter()
            .scan(0.0, |acc, w| {
                *acc += w;
                Some(*acc)
            })
            .collect();

        if let Some(&total) = cdf.last() {
            for c in &mut cdf {
                *c /= total;
            }
        }
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }

        Self { cdf }
    }

    /// Zero-based index of the first point whose cumulative value is `>= z`.
    pub(crate) fn index_of(&self, z: f64) -> usize {
        let index = self.cdf.partition_point(|&c| c < z);
        index.min(self.cdf.len().saturating_sub(1))
    }

    /// Probability mass of the zero-based point `index`.
    pub(crate) fn mass(&self, index: usize) -> f64 {
        match index {
            0 => self.cdf.first().copied().unwrap_or(0.0),
            i if i < self.cdf.len() => self.cdf[i] - self.cdf[i - 1],
            _ => 0.0,
        }
    }
}
