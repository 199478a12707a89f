//! Analysis configuration types.
//!
//! Every section deserializes with defaults, so a config document only needs
//! to name the values it changes.

use demand_core::{
    FitOptions, DEFAULT_DEMAND_DISCOUNT, DEFAULT_DEMAND_MULTIPLIER, DEFAULT_ELASTICITY,
    DEFAULT_FORECAST_DAYS, WEEKLY_PERIOD,
};
use demand_spi::{DemandError, FareClass, FareClassMix, FareTier, FareTierSet, Result};
use serde::{Deserialize, Serialize};

const TIER_NAMES: [&str; 4] = ["Super Advance", "Advance", "Semi-Flex", "Flex"];

// ============================================================================
// Forecast Configuration
// ============================================================================

/// Smoothing-weight search settings.
pub type FitConfig = FitOptions;

/// Seasonal period, horizon and optimizer settings for the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Seasonal period in days.
    pub period: usize,
    /// Number of days to forecast past the history.
    pub forecast_days: usize,
    pub fit: FitConfig,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            period: WEEKLY_PERIOD,
            forecast_days: DEFAULT_FORECAST_DAYS,
            fit: FitConfig::default(),
        }
    }
}

impl ForecastConfig {
    pub fn validate(&self) -> Result<()> {
        if self.period < 2 {
            return Err(DemandError::config("period", "must be at least 2"));
        }
        if self.forecast_days == 0 {
            return Err(DemandError::config("forecast_days", "must be at least 1"));
        }
        self.fit.validate()
    }
}

// ============================================================================
// Fare Tier Configuration
// ============================================================================

/// One fare tier: price and share of demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    pub name: String,
    pub unit_price: f64,
    pub allocation_fraction: f64,
}

impl TierConfig {
    pub fn new(name: impl Into<String>, unit_price: f64, allocation_fraction: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            allocation_fraction,
        }
    }

    /// Standard rail tiers: 25% at £45, 40% at £79, 20% at £125, 15% at £179.
    pub fn standard_rail() -> Vec<TierConfig> {
        rail_tiers([45.0, 79.0, 125.0, 179.0], [0.25, 0.40, 0.20, 0.15])
    }

    /// Validate a tier list into a [`FareTierSet`].
    pub fn build_set(tiers: &[TierConfig]) -> Result<FareTierSet> {
        let tiers = tiers
            .iter()
            .map(|t| FareTier::new(t.name.clone(), t.unit_price, t.allocation_fraction))
            .collect::<Result<Vec<_>>>()?;
        FareTierSet::new(tiers)
    }
}

fn rail_tiers(prices: [f64; 4], fractions: [f64; 4]) -> Vec<TierConfig> {
    TIER_NAMES
        .iter()
        .zip(prices)
        .zip(fractions)
        .map(|((name, price), fraction)| TierConfig::new(*name, price, fraction))
        .collect()
}

// ============================================================================
// Pricing Scenario Configuration
// ============================================================================

/// Current versus proposed tier prices for the what-if comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingScenarioConfig {
    pub current: Vec<TierConfig>,
    pub proposed: Vec<TierConfig>,
    /// Fraction of demand lost under the proposed prices.
    pub demand_discount: f64,
}

impl Default for PricingScenarioConfig {
    fn default() -> Self {
        let allocation = [0.25, 0.35, 0.25, 0.15];
        Self {
            current: rail_tiers([45.0, 79.0, 125.0, 179.0], allocation),
            proposed: rail_tiers([65.0, 95.0, 145.0, 199.0], allocation),
            demand_discount: DEFAULT_DEMAND_DISCOUNT,
        }
    }
}

// ============================================================================
// Elasticity Configuration
// ============================================================================

/// Elasticity coefficient, the price change applied to the history, and the
/// grid of price changes to sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticityConfig {
    pub coefficient: f64,
    pub price_change: f64,
    pub sweep_min: f64,
    pub sweep_max: f64,
    pub sweep_steps: usize,
}

impl Default for ElasticityConfig {
    fn default() -> Self {
        Self {
            coefficient: DEFAULT_ELASTICITY,
            price_change: 0.0,
            sweep_min: -0.2,
            sweep_max: 0.2,
            sweep_steps: 5,
        }
    }
}

// ============================================================================
// Inventory Configuration
// ============================================================================

/// One seat-inventory fare class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareClassConfig {
    pub name: String,
    pub allocation_ratio: f64,
}

impl FareClassConfig {
    pub fn new(name: impl Into<String>, allocation_ratio: f64) -> Self {
        Self {
            name: name.into(),
            allocation_ratio,
        }
    }
}

/// Seat allocation across fare classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub classes: Vec<FareClassConfig>,
    pub demand_multiplier: f64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            classes: vec![
                FareClassConfig::new("Economy", 0.5),
                FareClassConfig::new("Premium Economy", 0.3),
                FareClassConfig::new("Business", 0.15),
                FareClassConfig::new("First Class", 0.05),
            ],
            demand_multiplier: DEFAULT_DEMAND_MULTIPLIER,
        }
    }
}

impl InventoryConfig {
    pub fn build_mix(&self) -> Result<FareClassMix> {
        let classes = self
            .classes
            .iter()
            .map(|c| FareClass::new(c.name.clone(), c.allocation_ratio))
            .collect::<Result<Vec<_>>>()?;
        FareClassMix::new(classes)
    }
}

// ============================================================================
// Analysis Configuration
// ============================================================================

/// Complete configuration for a revenue analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub forecast: ForecastConfig,
    /// Tiers used to price the forecast and the history.
    pub tiers: Vec<TierConfig>,
    pub pricing: PricingScenarioConfig,
    pub elasticity: ElasticityConfig,
    pub inventory: InventoryConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            forecast: ForecastConfig::default(),
            tiers: TierConfig::standard_rail(),
            pricing: PricingScenarioConfig::default(),
            elasticity: ElasticityConfig::default(),
            inventory: InventoryConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a JSON config document. Missing sections take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DemandError::config("config", e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DemandError::config("config", e.to_string()))
    }

    /// Check every section without running anything.
    pub fn validate(&self) -> Result<()> {
        crate::analysis::RevenueAnalysis::new(self.clone()).map(|_| ())
    }
}
