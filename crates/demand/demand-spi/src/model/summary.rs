//! Revenue performance summary models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Passengers and revenue for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub passengers: f64,
    pub revenue: f64,
}

/// Headline passenger and revenue figures over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub days: usize,
    pub average_daily_passengers: f64,
    pub peak_day_passengers: f64,
    pub peak_day: NaiveDate,
    pub average_daily_revenue: f64,
    pub peak_daily_revenue: f64,
}
