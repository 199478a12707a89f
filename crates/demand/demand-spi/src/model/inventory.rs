//! Seat inventory allocation model

use serde::{Deserialize, Serialize};

/// Seats allocated to one fare class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatAllocation {
    pub fare_class: String,
    pub allocation_ratio: f64,
    pub allocated_seats: f64,
    /// Expected bookings: `allocated_seats × demand_multiplier`
    pub expected_demand: f64,
}
