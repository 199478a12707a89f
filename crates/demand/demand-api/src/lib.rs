//! Demand Consumer API
//!
//! Configuration, builder and the end-to-end [`RevenueAnalysis`] over the
//! demand core.

pub mod analysis;
pub mod builder;
pub mod config;

pub use analysis::{AnalysisReport, RevenueAnalysis};
pub use builder::AnalysisBuilder;
pub use config::{
    AnalysisConfig, ElasticityConfig, FareClassConfig, FitConfig, ForecastConfig, InventoryConfig,
    PricingScenarioConfig, TierConfig,
};

// Re-export from core
pub use demand_core::{
    accuracy, allocate_revenue, daily_revenue, decompose_additive, decomposition, elasticity,
    fill, forward_fill, holt_winters, inventory, performance, price_change_grid, revenue,
    summarize, summarize_window, AdditiveDecomposer, ElasticityModel, FitOptions,
    FittedHoltWinters, ForecastAccuracy, HoltWinters, InventoryAllocator, PricingScenario,
    DEFAULT_FORECAST_DAYS, WEEKLY_PERIOD,
};

// Re-export from SPI
pub use demand_spi::{
    DailyRevenue, Decomposer, DemandError, DemandForecaster, DemandObservation, DemandSeries,
    ElasticityScenario, FareClass, FareClassMix, FareTier, FareTierSet, Forecast, ForecastPoint,
    PerformanceSummary, PricingComparison, Result, RevenueBreakdown, SeasonalDecomposition,
    SeatAllocation, SmoothingParams, TierRevenue, TierRevenueChange,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnalysisBuilder, AnalysisConfig, AnalysisReport, RevenueAnalysis, TierConfig};
    pub use demand_core::{forward_fill, AdditiveDecomposer, HoltWinters};
    pub use demand_spi::{
        Decomposer, DemandError, DemandForecaster, DemandObservation, DemandSeries, Forecast,
        Result,
    };
}
