//! Fare-tier revenue allocation
//!
//! Demand is split across tiers by their fixed allocation fractions:
//! `revenue_i = D × fraction_i × price_i`. Tier sets are validated when
//! built, so allocation itself cannot fail.

use demand_spi::{
    DemandError, FareTierSet, PricingComparison, Result, RevenueBreakdown, TierRevenue,
    TierRevenueChange,
};
use serde::Serialize;
use tracing::debug;

/// Demand reduction assumed when prices rise, as a fraction
pub const DEFAULT_DEMAND_DISCOUNT: f64 = 0.05;

/// Distribute `demand` across `tiers` and price each share.
pub fn allocate_revenue(demand: f64, tiers: &FareTierSet) -> RevenueBreakdown {
    let tiers: Vec<TierRevenue> = tiers
        .iter()
        .map(|tier| {
            let passengers = demand * tier.allocation_fraction();
            TierRevenue {
                name: tier.name().to_string(),
                unit_price: tier.unit_price(),
                allocation_fraction: tier.allocation_fraction(),
                passengers,
                revenue: passengers * tier.unit_price(),
            }
        })
        .collect();
    let total_revenue = tiers.iter().map(|t| t.revenue).sum();

    RevenueBreakdown {
        demand,
        tiers,
        total_revenue,
    }
}

/// Current versus proposed pricing, with a flat demand reduction applied to
/// the proposal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingScenario {
    current: FareTierSet,
    proposed: FareTierSet,
    demand_discount: f64,
}

impl PricingScenario {
    /// `demand_discount` is the fraction of demand lost under the proposed
    /// pricing and must lie in `[0, 1)`.
    pub fn new(current: FareTierSet, proposed: FareTierSet, demand_discount: f64) -> Result<Self> {
        if !demand_discount.is_finite() || !(0.0..1.0).contains(&demand_discount) {
            return Err(DemandError::config(
                "demand_discount",
                format!("must be within [0, 1), got {}", demand_discount),
            ));
        }
        Ok(Self {
            current,
            proposed,
            demand_discount,
        })
    }

    pub fn current(&self) -> &FareTierSet {
        &self.current
    }

    pub fn proposed(&self) -> &FareTierSet {
        &self.proposed
    }

    pub fn demand_discount(&self) -> f64 {
        self.demand_discount
    }

    /// Revenue under both pricings for the same baseline demand.
    pub fn compare(&self, demand: f64) -> PricingComparison {
        let current = allocate_revenue(demand, &self.current);
        let proposed = allocate_revenue(demand * (1.0 - self.demand_discount), &self.proposed);

        let tier_changes = current
            .tiers
            .iter()
            .filter_map(|cur| {
                proposed.tier(&cur.name).map(|prop| TierRevenueChange {
                    name: cur.name.clone(),
                    current_revenue: cur.revenue,
                    proposed_revenue: prop.revenue,
                    change_pct: percent_change(cur.revenue, prop.revenue),
                })
            })
            .collect();
        let improvement_pct = percent_change(current.total_revenue, proposed.total_revenue);

        debug!(
            demand,
            current = current.total_revenue,
            proposed = proposed.total_revenue,
            "compared pricing scenarios"
        );

        PricingComparison {
            current,
            proposed,
            demand_discount: self.demand_discount,
            tier_changes,
            improvement_pct,
        }
    }
}

fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        None
    } else {
        Some((to - from) / from * 100.0)
    }
}
