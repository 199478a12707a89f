//! Model module containing data structures

mod decomposition;
mod demand_series;
mod elasticity;
mod fare_tier;
mod forecast;
mod inventory;
mod revenue;
mod summary;

pub use decomposition::SeasonalDecomposition;
pub use demand_series::{DemandObservation, DemandSeries};
pub use elasticity::ElasticityScenario;
pub use fare_tier::{FareClass, FareClassMix, FareTier, FareTierSet, ALLOCATION_TOLERANCE};
pub use forecast::{Forecast, ForecastPoint, SmoothingParams};
pub use inventory::SeatAllocation;
pub use revenue::{PricingComparison, RevenueBreakdown, TierRevenue, TierRevenueChange};
pub use summary::{DailyRevenue, PerformanceSummary};
