//! Forecast model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Smoothing weights chosen by the Holt-Winters fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParams {
    /// Level smoothing
    pub alpha: f64,
    /// Trend smoothing
    pub beta: f64,
    /// Seasonal smoothing
    pub gamma: f64,
}

impl SmoothingParams {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }
}

/// Predicted passengers for one future day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub passengers: f64,
}

/// Fixed-horizon demand projection produced by a single model fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
    params: SmoothingParams,
}

impl Forecast {
    pub fn new(points: Vec<ForecastPoint>, params: SmoothingParams) -> Self {
        Self { points, params }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Smoothing weights of the model that produced this forecast.
    pub fn params(&self) -> SmoothingParams {
        self.params
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.passengers).collect()
    }

    /// Total predicted passengers over the horizon.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.passengers).sum()
    }

    /// Mean predicted daily passengers. NaN for an empty forecast.
    pub fn mean(&self) -> f64 {
        if self.points.is_empty() {
            return f64::NAN;
        }
        self.total() / self.points.len() as f64
    }
}
