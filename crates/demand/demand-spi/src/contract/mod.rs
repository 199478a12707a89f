//! Contract module containing trait definitions for demand operations

mod decomposer;
mod demand_forecaster;

pub use decomposer::Decomposer;
pub use demand_forecaster::DemandForecaster;
