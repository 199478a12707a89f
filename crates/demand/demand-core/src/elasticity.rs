//! Linear price-elasticity adjustment
//!
//! `adjusted = demand × (1 + ε × δ)` for elasticity coefficient `ε` and
//! fractional price change `δ`. This is a pointwise linear approximation
//! with an assumed coefficient, not a calibrated elasticity estimate.

use demand_spi::{DemandError, DemandObservation, DemandSeries, ElasticityScenario, Result};
use serde::{Deserialize, Serialize};

/// Assumed demand response to price, used when none is configured
pub const DEFAULT_ELASTICITY: f64 = -0.8;

/// Elasticity adjustment with a fixed, non-positive coefficient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawElasticityModel")]
pub struct ElasticityModel {
    coefficient: f64,
}

#[derive(Deserialize)]
struct RawElasticityModel {
    coefficient: f64,
}

impl TryFrom<RawElasticityModel> for ElasticityModel {
    type Error = DemandError;

    fn try_from(raw: RawElasticityModel) -> Result<Self> {
        Self::new(raw.coefficient)
    }
}

impl Default for ElasticityModel {
    fn default() -> Self {
        Self {
            coefficient: DEFAULT_ELASTICITY,
        }
    }
}

impl ElasticityModel {
    pub fn new(coefficient: f64) -> Result<Self> {
        if !coefficient.is_finite() || coefficient > 0.0 {
            return Err(DemandError::config(
                "elasticity",
                format!("must be finite and non-positive, got {}", coefficient),
            ));
        }
        Ok(Self { coefficient })
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Demand multiplier `1 + ε × δ` for a fractional price change `δ`.
    pub fn multiplier(&self, price_change: f64) -> Result<f64> {
        if !price_change.is_finite() {
            return Err(DemandError::config(
                "price_change",
                format!("must be finite, got {}", price_change),
            ));
        }
        let multiplier = 1.0 + self.coefficient * price_change;
        if multiplier < 0.0 {
            return Err(DemandError::config(
                "price_change",
                format!(
                    "{} with elasticity {} would make demand negative",
                    price_change, self.coefficient
                ),
            ));
        }
        Ok(multiplier)
    }

    /// Scale every reading by the multiplier; missing readings stay missing.
    pub fn adjust(&self, series: &DemandSeries, price_change: f64) -> Result<DemandSeries> {
        let multiplier = self.multiplier(price_change)?;
        let adjusted = series
            .observations()
            .iter()
            .map(|obs| DemandObservation {
                date: obs.date,
                passengers: obs.passengers.map(|p| p * multiplier),
            })
            .collect();
        DemandSeries::new(adjusted)
    }

    /// Adjusted total demand for each price change.
    pub fn sweep(
        &self,
        series: &DemandSeries,
        price_changes: &[f64],
    ) -> Result<Vec<ElasticityScenario>> {
        let base_total = series.total();
        price_changes
            .iter()
            .map(|&price_change| {
                let multiplier = self.multiplier(price_change)?;
                Ok(ElasticityScenario {
                    price_change,
                    multiplier,
                    adjusted_total: base_total * multiplier,
                })
            })
            .collect()
    }
}

/// Evenly spaced price changes from `min` to `max` inclusive.
pub fn price_change_grid(min: f64, max: f64, steps: usize) -> Result<Vec<f64>> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(DemandError::config(
            "price_change_range",
            format!("invalid range [{}, {}]", min, max),
        ));
    }
    match steps {
        0 => Err(DemandError::config("steps", "must be at least 1")),
        1 => Ok(vec![min]),
        _ => {
            let width = (max - min) / (steps - 1) as f64;
            Ok((0..steps).map(|i| min + i as f64 * width).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> DemandSeries {
        DemandSeries::from_values(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), values).unwrap()
    }

    #[test]
    fn test_adjustment_ratio_is_exact() {
        let model = ElasticityModel::default();
        let original = series(&[100.0, 250.0, 4000.0, 3.5]);
        let adjusted = model.adjust(&original, 0.1).unwrap();
        let expected_ratio = 1.0 + (-0.8) * 0.1;

        for (a, o) in adjusted
            .values()
            .unwrap()
            .iter()
            .zip(original.values().unwrap())
        {
            assert!((a / o - expected_ratio).abs() < 1e-12);
        }
    }

    #[test]
    fn test_price_cut_raises_demand() {
        let model = ElasticityModel::new(-0.8).unwrap();
        let adjusted = model.adjust(&series(&[100.0]), -0.2).unwrap();
        assert!((adjusted.values().unwrap()[0] - 116.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_change_is_identity() {
        let original = series(&[100.0, 200.0]);
        let adjusted = ElasticityModel::default().adjust(&original, 0.0).unwrap();
        assert_eq!(adjusted, original);
    }

    #[test]
    fn test_missing_stays_missing() {
        let original = DemandSeries::new(vec![
            DemandObservation::new(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 10.0),
            DemandObservation::missing(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()),
        ])
        .unwrap();
        let adjusted = ElasticityModel::default().adjust(&original, 0.2).unwrap();
        assert!(adjusted.observations()[1].is_missing());
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(ElasticityModel::new(0.5).is_err());
        assert!(ElasticityModel::new(f64::NAN).is_err());

        let model = ElasticityModel::default();
        assert!(model.adjust(&series(&[1.0]), f64::INFINITY).is_err());
        // 1 + (-0.8 × 2.0) < 0
        assert!(model.adjust(&series(&[1.0]), 2.0).is_err());
    }

    #[test]
    fn test_deserialize_validates_coefficient() {
        let model: ElasticityModel = serde_json::from_str(r#"{"coefficient": -1.5}"#).unwrap();
        assert_eq!(model.coefficient(), -1.5);

        assert!(serde_json::from_str::<ElasticityModel>(r#"{"coefficient": 0.5}"#).is_err());

        let json = serde_json::to_string(&ElasticityModel::default()).unwrap();
        assert_eq!(serde_json::from_str::<ElasticityModel>(&json).unwrap().coefficient(), -0.8);
    }

    #[test]
    fn test_price_change_grid() {
        let grid = price_change_grid(-0.2, 0.2, 5).unwrap();
        let expected = [-0.2, -0.1, 0.0, 0.1, 0.2];
        for (g, e) in grid.iter().zip(expected) {
            assert!((g - e).abs() < 1e-12);
        }
        assert!(price_change_grid(0.2, -0.2, 5).is_err());
        assert!(price_change_grid(0.0, 1.0, 0).is_err());
        assert_eq!(price_change_grid(0.1, 0.3, 1).unwrap(), vec![0.1]);
    }

    #[test]
    fn test_sweep() {
        let model = ElasticityModel::default();
        let grid = price_change_grid(-0.2, 0.2, 5).unwrap();
        let scenarios = model.sweep(&series(&[100.0, 100.0]), &grid).unwrap();

        assert_eq!(scenarios.len(), 5);
        assert!((scenarios[0].adjusted_total - 232.0).abs() < 1e-9);
        assert!((scenarios[4].adjusted_total - 168.0).abs() < 1e-9);
        assert!(scenarios.windows(2).all(|w| w[1].adjusted_total < w[0].adjusted_total));
    }
}
