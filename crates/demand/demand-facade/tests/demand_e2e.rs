//! End-to-end tests for the demand stack
//!
//! Runs the complete revenue analysis over a seeded synthetic year.

mod support;

use demand_facade::{AnalysisBuilder, AnalysisConfig, DemandError, RevenueAnalysis};
use support::{date, synthetic_year};

#[test]
fn e2e_default_analysis() {
    let series = synthetic_year(42);
    let report = RevenueAnalysis::new(AnalysisConfig::default())
        .unwrap()
        .run(&series)
        .unwrap();

    assert_eq!(report.decomposition.len(), 365);
    assert_eq!(report.forecast.len(), 30);
    assert_eq!(report.forecast.dates()[0], date(2024, 1, 1));
    assert!(report.forecast.values().iter().all(|v| v.is_finite()));
    assert!(report.fit_accuracy.rmse.is_finite());

    // Revenue follows the forecast mean through the standard tiers
    let demand = report.forecast_daily_demand;
    assert!((report.forecast_revenue.total_revenue - demand * 94.7).abs() < 1e-6);
    assert!((report.pricing.current.demand - demand).abs() < 1e-12);
    assert!((report.pricing.proposed.demand - demand * 0.95).abs() < 1e-9);

    let seats: f64 = report.inventory.iter().map(|a| a.allocated_seats).sum();
    assert!((seats - demand).abs() < 1e-6);
    assert_eq!(report.inventory[0].fare_class, "Economy");

    assert_eq!(report.history.days, 365);
    assert!(report.history.peak_day_passengers >= report.history.average_daily_passengers);
}

#[test]
fn e2e_price_rise_lowers_history() {
    let series = synthetic_year(5);
    let report = AnalysisBuilder::new()
        .price_change(0.1)
        .forecast_days(7)
        .build()
        .unwrap()
        .run(&series)
        .unwrap();

    let ratio = report.adjusted_history.total() / series.total();
    assert!((ratio - 0.92).abs() < 1e-9);

    let sweep = &report.elasticity_sweep;
    assert_eq!(sweep.len(), 5);
    assert!((sweep[2].price_change).abs() < 1e-12);
    assert!((sweep[2].adjusted_total - series.total()).abs() < 1e-6);
}

#[test]
fn e2e_analysis_from_json_config() {
    let json = r#"{
        "forecast": { "forecast_days": 14, "fit": { "grid_step": 0.1 } },
        "tiers": [
            { "name": "Saver", "unit_price": 30.0, "allocation_fraction": 0.6 },
            { "name": "Anytime", "unit_price": 90.0, "allocation_fraction": 0.4 }
        ],
        "inventory": { "demand_multiplier": 0.2 }
    }"#;
    let config = AnalysisConfig::from_json(json).unwrap();
    assert_eq!(config.forecast.fit.max_iterations, 10_000);

    let report = AnalysisBuilder::from_config(config)
        .build()
        .unwrap()
        .run(&synthetic_year(42))
        .unwrap();

    assert_eq!(report.forecast.len(), 14);
    assert_eq!(report.forecast_revenue.tiers.len(), 2);
    // 0.6 × 30 + 0.4 × 90 = 54 per passenger
    let demand = report.forecast_daily_demand;
    assert!((report.forecast_revenue.total_revenue - demand * 54.0).abs() < 1e-6);
    assert!((report.inventory[0].expected_demand - demand * 0.5 * 0.2).abs() < 1e-6);
}

#[test]
fn e2e_invalid_config_fails_before_running() {
    let json = r#"{ "tiers": [ { "name": "Only", "unit_price": 10.0, "allocation_fraction": 0.9 } ] }"#;
    let config = AnalysisConfig::from_json(json).unwrap();
    assert!(matches!(
        RevenueAnalysis::new(config),
        Err(DemandError::Config { .. })
    ));
}

#[test]
fn e2e_report_serializes() {
    let report = AnalysisBuilder::new()
        .forecast_days(7)
        .build()
        .unwrap()
        .run(&synthetic_year(1))
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["forecast"]["points"].as_array().unwrap().len(), 7);
    assert_eq!(json["inventory"].as_array().unwrap().len(), 4);
    assert!(json["pricing"]["improvement_pct"].is_number());
}
