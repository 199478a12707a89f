//! Daily passenger demand series

use crate::error::{DemandError, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single day's passenger count. `None` marks a missing reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandObservation {
    pub date: NaiveDate,
    pub passengers: Option<f64>,
}

impl DemandObservation {
    pub fn new(date: NaiveDate, passengers: f64) -> Self {
        Self {
            date,
            passengers: Some(passengers),
        }
    }

    pub fn missing(date: NaiveDate) -> Self {
        Self {
            date,
            passengers: None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.passengers.is_none()
    }
}

/// Ordered daily passenger counts.
///
/// Dates are strictly increasing and every present count is finite and
/// non-negative. The series may still contain missing days or missing
/// readings; decomposition and fitting require a forward-filled series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<DemandObservation>",
    into = "Vec<DemandObservation>"
)]
pub struct DemandSeries {
    observations: Vec<DemandObservation>,
}

impl DemandSeries {
    /// Build a series, validating date order and passenger counts.
    pub fn new(observations: Vec<DemandObservation>) -> Result<Self> {
        for obs in &observations {
            if let Some(value) = obs.passengers {
                if !value.is_finite() || value < 0.0 {
                    return Err(DemandError::InvalidData(format!(
                        "passenger count on {} must be finite and non-negative, got {}",
                        obs.date, value
                    )));
                }
            }
        }

        if let Some(pair) = observations.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(DemandError::InvalidData(format!(
                "dates must be strictly increasing: {} follows {}",
                pair[1].date, pair[0].date
            )));
        }

        Ok(Self { observations })
    }

    /// Build a contiguous daily series starting at `start`.
    pub fn from_values(start: NaiveDate, values: &[f64]) -> Result<Self> {
        let observations = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                start
                    .checked_add_days(Days::new(i as u64))
                    .map(|date| DemandObservation::new(date, value))
                    .ok_or_else(|| {
                        DemandError::InvalidData(format!("date overflow at offset {}", i))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(observations)
    }

    pub fn observations(&self) -> &[DemandObservation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// Whether any reading is missing.
    pub fn has_missing(&self) -> bool {
        self.observations.iter().any(DemandObservation::is_missing)
    }

    /// Whether consecutive observations are exactly one day apart.
    pub fn is_contiguous(&self) -> bool {
        self.observations
            .windows(2)
            .all(|w| w[1].date.signed_duration_since(w[0].date).num_days() == 1)
    }

    /// Passenger counts as a dense vector.
    ///
    /// Fails if any reading is missing; forward-fill the series first.
    pub fn values(&self) -> Result<Vec<f64>> {
        self.observations
            .iter()
            .map(|o| {
                o.passengers.ok_or_else(|| {
                    DemandError::InvalidData(format!(
                        "missing passenger count on {}; forward-fill the series first",
                        o.date
                    ))
                })
            })
            .collect()
    }

    /// Sum of all present readings.
    pub fn total(&self) -> f64 {
        self.observations.iter().filter_map(|o| o.passengers).sum()
    }

    /// Observations with `start <= date <= end`.
    pub fn window(&self, start: NaiveDate, end: NaiveDate) -> DemandSeries {
        DemandSeries {
            observations: self
                .observations
                .iter()
                .filter(|o| o.date >= start && o.date <= end)
                .copied()
                .collect(),
        }
    }
}

impl TryFrom<Vec<DemandObservation>> for DemandSeries {
    type Error = DemandError;

    fn try_from(observations: Vec<DemandObservation>) -> Result<Self> {
        Self::new(observations)
    }
}

impl From<DemandSeries> for Vec<DemandObservation> {
    fn from(series: DemandSeries) -> Self {
        series.observations
    }
}
