//! Trait for seasonal decomposition of demand series

use crate::error::Result;
use crate::model::{DemandSeries, SeasonalDecomposition};

/// Splits a demand series into trend, seasonal and residual components
pub trait Decomposer: Send + Sync {
    /// Decompose `series` with the given seasonal `period`.
    ///
    /// Implementations return components with the same length and alignment
    /// as the input and fail with `InsufficientData` when the series is
    /// shorter than two full periods.
    fn decompose(&self, series: &DemandSeries, period: usize) -> Result<SeasonalDecomposition>;
}
