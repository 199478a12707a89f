//! Demand error types
//!
//! Defines the standardized error type for decomposition, forecasting and
//! revenue allocation.

use thiserror::Error;

/// Result type alias for demand operations
pub type Result<T> = std::result::Result<T, DemandError>;

/// Errors that can occur during demand analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemandError {
    /// Series too short for the requested decomposition or fit period
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Model fit failed: degenerate input or optimizer did not converge
    #[error("Model fit failed: {0}")]
    ModelFit(String),

    /// Invalid configuration (fare tiers, horizons, coefficients)
    #[error("Invalid configuration '{name}': {reason}")]
    Config { name: String, reason: String },

    /// Series violates a shape precondition
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl DemandError {
    /// Shorthand for a [`DemandError::Config`] error.
    pub fn config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        DemandError::Config {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = DemandError::InsufficientData {
            required: 14,
            actual: 10,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 14 points, got 10"
        );
    }

    #[test]
    fn test_model_fit_display() {
        let error = DemandError::ModelFit("series is constant".to_string());
        assert_eq!(error.to_string(), "Model fit failed: series is constant");
    }

    #[test]
    fn test_config_helper() {
        let error = DemandError::config("allocation_fraction", "must sum to 1.0");
        assert_eq!(
            error,
            DemandError::Config {
                name: "allocation_fraction".to_string(),
                reason: "must sum to 1.0".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "Invalid configuration 'allocation_fraction': must sum to 1.0"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = DemandError::InvalidData("dates out of order".to_string());
        assert_eq!(error.to_string(), "Invalid data: dates out of order");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DemandError>();
    }

    #[test]
    fn test_error_can_be_boxed() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(DemandError::ModelFit("no convergence".to_string()));
        assert!(boxed.downcast_ref::<DemandError>().is_some());
    }
}
