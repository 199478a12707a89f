//! Forecast accuracy metrics
//!
//! Used to score the in-sample one-step-ahead predictions of a fitted model
//! against the history it was fitted on.

use demand_spi::{DemandError, Result};
use serde::{Deserialize, Serialize};

/// Mean absolute error. Same scale as the data.
pub fn mae(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;
    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum();
    Ok(sum / actual.len() as f64)
}

/// Root mean squared error.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;
    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    Ok((sum / actual.len() as f64).sqrt())
}

/// Mean absolute percentage error, as a fraction.
///
/// Days with zero actual demand are skipped; `None` if every day is zero.
pub fn mape(actual: &[f64], predicted: &[f64]) -> Result<Option<f64>> {
    check_lengths(actual, predicted)?;
    let errors: Vec<f64> = actual
        .iter()
        .zip(predicted)
        .filter(|(a, _)| a.abs() > 1e-10)
        .map(|(a, p)| ((a - p) / a).abs())
        .collect();
    if errors.is_empty() {
        return Ok(None);
    }
    Ok(Some(errors.iter().sum::<f64>() / errors.len() as f64))
}

/// All accuracy metrics for one set of predictions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastAccuracy {
    pub mae: f64,
    pub rmse: f64,
    pub mape: Option<f64>,
}

impl ForecastAccuracy {
    pub fn compute(actual: &[f64], predicted: &[f64]) -> Result<Self> {
        Ok(Self {
            mae: mae(actual, predicted)?,
            rmse: rmse(actual, predicted)?,
            mape: mape(actual, predicted)?,
        })
    }
}

fn check_lengths(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() {
        return Err(DemandError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if actual.len() != predicted.len() {
        return Err(DemandError::InvalidData(format!(
            "{} actual values but {} predictions",
            actual.len(),
            predicted.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_prediction() {
        let actual = [10.0, 20.0, 30.0];
        let accuracy = ForecastAccuracy::compute(&actual, &actual).unwrap();
        assert_eq!(accuracy.mae, 0.0);
        assert_eq!(accuracy.rmse, 0.0);
        assert_eq!(accuracy.mape, Some(0.0));
    }

    #[test]
    fn test_known_errors() {
        let actual = [100.0, 200.0];
        let predicted = [110.0, 170.0];
        assert!((mae(&actual, &predicted).unwrap() - 20.0).abs() < 1e-12);
        // sqrt((100 + 900) / 2)
        assert!((rmse(&actual, &predicted).unwrap() - 500f64.sqrt()).abs() < 1e-12);
        assert!((mape(&actual, &predicted).unwrap().unwrap() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_mape_skips_zero_days() {
        assert_eq!(mape(&[0.0, 0.0], &[1.0, 2.0]).unwrap(), None);
        let value = mape(&[0.0, 50.0], &[5.0, 40.0]).unwrap().unwrap();
        assert!((value - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_mismatched_lengths() {
        assert!(matches!(
            mae(&[1.0, 2.0], &[1.0]),
            Err(DemandError::InvalidData(_))
        ));
        assert!(matches!(
            rmse(&[], &[]),
            Err(DemandError::InsufficientData { .. })
        ));
    }
}
