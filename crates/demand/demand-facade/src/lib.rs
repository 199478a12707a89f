//! Demand Facade
//!
//! High-level API for rail demand forecasting and revenue allocation.
//! Re-exports all public types from the demand stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use demand_api::*;

// Explicit re-exports for documentation
pub use demand_api::prelude;

// Re-export core constants and defaults
pub use demand_core::{
    DEFAULT_DEMAND_DISCOUNT, DEFAULT_DEMAND_MULTIPLIER, DEFAULT_ELASTICITY,
};

// Re-export SPI constants
pub use demand_spi::ALLOCATION_TOLERANCE;
