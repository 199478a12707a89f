//! Analysis builder.

use crate::analysis::RevenueAnalysis;
use crate::config::{AnalysisConfig, FareClassConfig, FitConfig, TierConfig};
use demand_spi::Result;

/// Builder for a [`RevenueAnalysis`], starting from the default config.
#[derive(Debug, Clone, Default)]
pub struct AnalysisBuilder {
    config: AnalysisConfig,
}

impl AnalysisBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config, e.g. one loaded from JSON.
    pub fn from_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    // ========== Forecast Methods ==========

    /// Set the seasonal period in days.
    pub fn period(mut self, period: usize) -> Self {
        self.config.forecast.period = period;
        self
    }

    /// Set the forecast horizon in days.
    pub fn forecast_days(mut self, days: usize) -> Self {
        self.config.forecast.forecast_days = days;
        self
    }

    pub fn fit(mut self, fit: FitConfig) -> Self {
        self.config.forecast.fit = fit;
        self
    }

    // ========== Revenue Methods ==========

    /// Replace the tiers used to price the forecast and history.
    pub fn tiers(mut self, tiers: Vec<TierConfig>) -> Self {
        self.config.tiers = tiers;
        self
    }

    /// Set current and proposed tiers for the pricing comparison.
    pub fn pricing(mut self, current: Vec<TierConfig>, proposed: Vec<TierConfig>) -> Self {
        self.config.pricing.current = current;
        self.config.pricing.proposed = proposed;
        self
    }

    /// Set the demand lost under the proposed pricing.
    pub fn demand_discount(mut self, discount: f64) -> Self {
        self.config.pricing.demand_discount = discount;
        self
    }

    // ========== Elasticity Methods ==========

    pub fn elasticity(mut self, coefficient: f64) -> Self {
        self.config.elasticity.coefficient = coefficient;
        self
    }

    /// Fractional price change applied to the history.
    pub fn price_change(mut self, change: f64) -> Self {
        self.config.elasticity.price_change = change;
        self
    }

    /// Price changes to sweep: `steps` points from `min` to `max`.
    pub fn sweep(mut self, min: f64, max: f64, steps: usize) -> Self {
        self.config.elasticity.sweep_min = min;
        self.config.elasticity.sweep_max = max;
        self.config.elasticity.sweep_steps = steps;
        self
    }

    // ========== Inventory Methods ==========

    pub fn fare_classes(mut self, classes: Vec<FareClassConfig>) -> Self {
        self.config.inventory.classes = classes;
        self
    }

    pub fn demand_multiplier(mut self, multiplier: f64) -> Self {
        self.config.inventory.demand_multiplier = multiplier;
        self
    }

    // ========== Build ==========

    /// The config as currently set, unvalidated.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn build(self) -> Result<RevenueAnalysis> {
        RevenueAnalysis::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demand_spi::DemandError;

    #[test]
    fn test_builder_sets_values() {
        let builder = AnalysisBuilder::new()
            .forecast_days(14)
            .elasticity(-1.2)
            .price_change(0.05)
            .demand_discount(0.1)
            .sweep(-0.1, 0.1, 3);

        let config = builder.config();
        assert_eq!(config.forecast.forecast_days, 14);
        assert_eq!(config.elasticity.coefficient, -1.2);
        assert_eq!(config.elasticity.sweep_steps, 3);
        assert_eq!(config.pricing.demand_discount, 0.1);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_build_validates() {
        let result = AnalysisBuilder::new().demand_multiplier(-1.0).build();
        assert!(matches!(result, Err(DemandError::Config { .. })));

        let result = AnalysisBuilder::new()
            .fare_classes(vec![FareClassConfig::new("Economy", 0.9)])
            .build();
        assert!(matches!(result, Err(DemandError::Config { .. })));

        assert!(AnalysisBuilder::new().period(1).build().is_err());
        assert!(AnalysisBuilder::new().elasticity(0.3).build().is_err());
    }
}
