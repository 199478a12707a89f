//! Seasonal decomposition result model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Additive decomposition of a demand series: `observed = trend + seasonal + residual`.
///
/// All components share the length and alignment of the input series. The
/// value is read-only; decompose again when the input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalDecomposition {
    period: usize,
    dates: Vec<NaiveDate>,
    observed: Vec<f64>,
    trend: Vec<f64>,
    seasonal: Vec<f64>,
    residual: Vec<f64>,
}

impl SeasonalDecomposition {
    pub fn new(
        period: usize,
        dates: Vec<NaiveDate>,
        observed: Vec<f64>,
        trend: Vec<f64>,
        seasonal: Vec<f64>,
        residual: Vec<f64>,
    ) -> Self {
        Self {
            period,
            dates,
            observed,
            trend,
            seasonal,
            residual,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    pub fn trend(&self) -> &[f64] {
        &self.trend
    }

    pub fn seasonal(&self) -> &[f64] {
        &self.seasonal
    }

    pub fn residual(&self) -> &[f64] {
        &self.residual
    }

    /// One full cycle of the seasonal component, starting at the first date.
    pub fn seasonal_pattern(&self) -> &[f64] {
        &self.seasonal[..self.period.min(self.seasonal.len())]
    }

    /// `trend + seasonal + residual` at every index.
    pub fn reconstruct(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(&self.seasonal)
            .zip(&self.residual)
            .map(|((t, s), r)| t + s + r)
            .collect()
    }
}
