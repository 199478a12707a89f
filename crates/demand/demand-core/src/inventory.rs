//! Seat inventory allocation across fare classes

use demand_spi::{DemandError, FareClass, FareClassMix, Result, SeatAllocation};
use serde::Serialize;

/// Share of allocated seats expected to turn into bookings
pub const DEFAULT_DEMAND_MULTIPLIER: f64 = 0.15;

/// Splits a seat demand figure across fare classes.
///
/// `allocated = demand × ratio`, `expected = allocated × demand_multiplier`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryAllocator {
    mix: FareClassMix,
    demand_multiplier: f64,
}

impl InventoryAllocator {
    pub fn new(mix: FareClassMix, demand_multiplier: f64) -> Result<Self> {
        if !demand_multiplier.is_finite() || demand_multiplier < 0.0 {
            return Err(DemandError::config(
                "demand_multiplier",
                format!("must be finite and non-negative, got {}", demand_multiplier),
            ));
        }
        Ok(Self {
            mix,
            demand_multiplier,
        })
    }

    /// Economy, Premium Economy, Business and First Class at 50/30/15/5%.
    pub fn standard() -> Result<Self> {
        let mix = FareClassMix::new(vec![
            FareClass::new("Economy", 0.5)?,
            FareClass::new("Premium Economy", 0.3)?,
            FareClass::new("Business", 0.15)?,
            FareClass::new("First Class", 0.05)?,
        ])?;
        Self::new(mix, DEFAULT_DEMAND_MULTIPLIER)
    }

    pub fn mix(&self) -> &FareClassMix {
        &self.mix
    }

    pub fn demand_multiplier(&self) -> f64 {
        self.demand_multiplier
    }

    pub fn allocate(&self, demand: f64) -> Vec<SeatAllocation> {
        self.mix
            .classes()
            .iter()
            .map(|class| {
                let allocated_seats = demand * class.allocation_ratio();
                SeatAllocation {
                    fare_class: class.name().to_string(),
                    allocation_ratio: class.allocation_ratio(),
                    allocated_seats,
                    expected_demand: allocated_seats * self.demand_multiplier,
                }
            })
            .collect()
    }
}
