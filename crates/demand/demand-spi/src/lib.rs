//! Demand Service Provider Interface
//!
//! Defines the error taxonomy, value objects and contracts shared by the
//! demand forecasting and revenue allocation stack.
//!
//! - [`DemandSeries`]: daily passenger counts, the input to every operation
//! - [`SeasonalDecomposition`], [`Forecast`]: derived, read-only views
//! - [`FareTierSet`], [`RevenueBreakdown`]: fare tiers and the revenue they earn
//! - [`Decomposer`], [`DemandForecaster`]: traits implemented by the core crate
//! - [`DemandError`]: standardized error type for all operations

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, DemandForecaster};
pub use error::{DemandError, Result};
pub use model::{
    DailyRevenue, DemandObservation, DemandSeries, ElasticityScenario, FareClass, FareClassMix,
    FareTier, FareTierSet, Forecast, ForecastPoint, PerformanceSummary, PricingComparison,
    RevenueBreakdown, SeasonalDecomposition, SeatAllocation, SmoothingParams, TierRevenue,
    TierRevenueChange, ALLOCATION_TOLERANCE,
};
