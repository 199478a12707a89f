//! Demand Core
//!
//! Core implementations for demand analysis:
//!
//! - [`fill`]: forward fill of missing days and readings
//! - [`decomposition`]: additive seasonal decomposition
//! - [`holt_winters`]: additive Holt-Winters fit and projection
//! - [`revenue`]: fare-tier revenue allocation and pricing what-ifs
//! - [`elasticity`]: linear price-elasticity adjustment
//! - [`inventory`]: seat allocation across fare classes
//! - [`performance`]: daily revenue and headline figures
//! - [`accuracy`]: forecast error metrics

pub mod accuracy;
pub mod decomposition;
pub mod elasticity;
pub mod fill;
pub mod holt_winters;
pub mod inventory;
pub mod performance;
pub mod revenue;

// Re-export SPI types for implementations
pub use demand_spi::{
    Decomposer, DemandError, DemandForecaster, DemandSeries, FareTierSet, Forecast, Result,
    SeasonalDecomposition,
};

// Re-export main types
pub use accuracy::ForecastAccuracy;
pub use decomposition::{decompose_additive, AdditiveDecomposer};
pub use elasticity::{price_change_grid, ElasticityModel, DEFAULT_ELASTICITY};
pub use fill::forward_fill;
pub use holt_winters::{FitOptions, FittedHoltWinters, HoltWinters, MIN_GRID_STEP};
pub use inventory::{InventoryAllocator, DEFAULT_DEMAND_MULTIPLIER};
pub use performance::{daily_revenue, summarize, summarize_window};
pub use revenue::{allocate_revenue, PricingScenario, DEFAULT_DEMAND_DISCOUNT};

/// Weekly cycle of daily demand
pub const WEEKLY_PERIOD: usize = 7;

/// Default forecast horizon in days
pub const DEFAULT_FORECAST_DAYS: usize = 30;
