//! Elasticity what-if model

use serde::{Deserialize, Serialize};

/// Demand response to one price change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElasticityScenario {
    /// Fractional price change, e.g. `0.1` for +10%
    pub price_change: f64,
    /// `1 + elasticity × price_change`
    pub multiplier: f64,
    /// Total passengers after adjustment
    pub adjusted_total: f64,
}
