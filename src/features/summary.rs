//! Aggregation of records computed at several co-occurrence angles
//!
//! Texture descriptors are usually computed from one co-occurrence matrix per
//! direction (0°, 45°, 90°, 135°) and reported as the mean and range across
//! directions, which makes them approximately rotation invariant.

use crate::common::error::{Result, invalid_parameter};
use crate::features::record::FeatureRecord;
use crate::features::selection::Feature;

/// Per-feature mean and range over directional records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalSummary {
    /// Mean of each feature across directions
    pub mean: FeatureRecord,
    /// Maximum minus minimum of each feature across directions
    pub range: FeatureRecord,
    /// Number of directional records summarized
    pub directions: usize,
}

impl DirectionalSummary {
    /// Summarize one record per direction
    ///
    /// # Errors
    ///
    /// Returns an error if `records` is empty
    pub fn from_records(records: &[FeatureRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(invalid_parameter(
                "records",
                &0,
                &"at least one directional record is required",
            ));
        }

        let count = records.len() as f64;
        let mut mean = FeatureRecord::default();
        let mut range = FeatureRecord::default();

        for feature in Feature::ALL {
            let (min, max, sum) = records.iter().map(|record| record.get(feature)).fold(
                (f64::INFINITY, f64::NEG_INFINITY, 0.0),
                |(min, max, sum), value| (min.min(value), max.max(value), sum + value),
            );

            // An undefined value in any direction leaves the range undefined too
            let spread = if sum.is_nan() { f64::NAN } else { max - min };

            mean.set(feature, sum / count);
            range.set(feature, spread);
        }

        Ok(Self {
            mean,
            range,
            directions: records.len(),
        })
    }
}
