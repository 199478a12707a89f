//! Revenue allocation models

use serde::{Deserialize, Serialize};

/// Revenue earned by one fare tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRevenue {
    pub name: String,
    pub unit_price: f64,
    pub allocation_fraction: f64,
    /// Passengers assigned to this tier: `demand × allocation_fraction`
    pub passengers: f64,
    /// `demand × allocation_fraction × unit_price`
    pub revenue: f64,
}

/// Per-tier and total revenue for a single demand value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub demand: f64,
    pub tiers: Vec<TierRevenue>,
    pub total_revenue: f64,
}

impl RevenueBreakdown {
    pub fn tier(&self, name: &str) -> Option<&TierRevenue> {
        self.tiers.iter().find(|t| t.name == name)
    }
}

/// Revenue change for a tier present in both the current and proposed pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRevenueChange {
    pub name: String,
    pub current_revenue: f64,
    pub proposed_revenue: f64,
    /// Percentage change; `None` when the current revenue is zero
    pub change_pct: Option<f64>,
}

/// What-if comparison between current and proposed fare tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingComparison {
    pub current: RevenueBreakdown,
    pub proposed: RevenueBreakdown,
    /// Fractional demand reduction applied to the proposed pricing
    pub demand_discount: f64,
    pub tier_changes: Vec<TierRevenueChange>,
    /// `(proposed - current) / current × 100`; `None` when current revenue is zero
    pub improvement_pct: Option<f64>,
}

impl PricingComparison {
    pub fn revenue_delta(&self) -> f64 {
        self.proposed.total_revenue - self.current.total_revenue
    }
}
