//! Trait for demand forecasting models

use crate::error::Result;
use crate::model::{DemandSeries, Forecast};

/// Fits a model to a demand history and projects it forward
pub trait DemandForecaster: Send + Sync {
    /// Forecast `horizon` days past the last date of `series`.
    ///
    /// The returned forecast has exactly `horizon` points, dated one day
    /// apart starting the day after the history ends.
    fn forecast(&self, series: &DemandSeries, horizon: usize) -> Result<Forecast>;
}
