//! Error types for demand operations
//!
//! This module provides the [`DemandError`] enum and [`Result`] type alias
//! used across the forecasting and revenue crates.

mod demand_error;

pub use demand_error::{DemandError, Result};
