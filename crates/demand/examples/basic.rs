//! Basic example: forecast a synthetic year and price the result
//!
//! Run with: cargo run --example basic -p demand-facade

use chrono::{Datelike, Days, NaiveDate};
use demand_facade::prelude::*;
use demand_facade::summarize_window;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn synthetic_year(seed: u64) -> Result<DemandSeries> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 200.0)
        .map_err(|e| DemandError::config("noise", e.to_string()))?;
    let start = NaiveDate::from_ymd_opt(2023, 1, 1)
        .ok_or_else(|| DemandError::InvalidData("bad start date".to_string()))?;

    let observations = (0..365u64)
        .map(|i| {
            let day = start + Days::new(i);
            let annual = 1.0 + 0.3 * (std::f64::consts::PI * i as f64 / 180.0).sin();
            let festival = if day.month() == 8 && day.day() <= 28 { 1500.0 } else { 0.0 };
            let passengers = (4000.0 + noise.sample(&mut rng)) * annual + festival;
            DemandObservation::new(day, passengers.max(0.0))
        })
        .collect();
    DemandSeries::new(observations)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demand_core=info,demand_api=info".into()),
        )
        .init();

    println!("=== Rail Demand Forecast & Revenue Allocation ===\n");

    let series = synthetic_year(42)?;
    let analysis = AnalysisBuilder::new().forecast_days(30).build()?;
    let report = analysis.run(&series)?;

    // 1. Decomposition
    println!("1. Weekly seasonal pattern");
    for (day, value) in report.decomposition.seasonal_pattern().iter().enumerate() {
        println!("   day {}: {:+.1}", day, value);
    }

    // 2. Forecast
    let params = report.forecast.params();
    println!(
        "\n2. Forecast (alpha={:.3}, beta={:.3}, gamma={:.3}, in-sample RMSE {:.1})",
        params.alpha, params.beta, params.gamma, report.fit_accuracy.rmse
    );
    for point in report.forecast.points().iter().take(7) {
        println!("   {}: {:.0}", point.date, point.passengers);
    }
    println!("   mean daily demand: {:.0}", report.forecast_daily_demand);

    // 3. Revenue
    println!("\n3. Forecast revenue by tier");
    for tier in &report.forecast_revenue.tiers {
        println!(
            "   {:<14} {:>6.0} pax x £{:>3.0} = £{:>10.2}",
            tier.name, tier.passengers, tier.unit_price, tier.revenue
        );
    }
    println!("   total: £{:.2}", report.forecast_revenue.total_revenue);

    // 4. Pricing what-if
    println!("\n4. Pricing scenario");
    println!("   current:  £{:.2}", report.pricing.current.total_revenue);
    println!("   proposed: £{:.2}", report.pricing.proposed.total_revenue);
    if let Some(pct) = report.pricing.improvement_pct {
        println!("   change:   {:+.1}%", pct);
    }

    // 5. Elasticity sweep
    println!("\n5. Elasticity sweep (coefficient {})", analysis.config().elasticity.coefficient);
    for scenario in &report.elasticity_sweep {
        println!(
            "   price {:+.0}% -> demand x{:.2} ({:.0} passengers)",
            scenario.price_change * 100.0,
            scenario.multiplier,
            scenario.adjusted_total
        );
    }

    // 6. Inventory
    println!("\n6. Seat inventory");
    for allocation in &report.inventory {
        println!(
            "   {:<16} {:>6.0} seats, {:>5.0} expected",
            allocation.fare_class, allocation.allocated_seats, allocation.expected_demand
        );
    }

    // 7. Historical performance
    let tiers = TierConfig::build_set(&analysis.config().tiers)?;
    let festival = summarize_window(
        &series,
        &tiers,
        NaiveDate::from_ymd_opt(2023, 8, 1).ok_or("bad date")?,
        NaiveDate::from_ymd_opt(2023, 8, 28).ok_or("bad date")?,
    )?;
    println!("\n7. Historical performance");
    println!(
        "   average daily passengers: {:.0} (festival {:.0})",
        report.history.average_daily_passengers, festival.average_daily_passengers
    );
    println!(
        "   peak day: {} with {:.0} passengers",
        report.history.peak_day, report.history.peak_day_passengers
    );
    println!(
        "   average daily revenue: £{:.2} (festival £{:.2})",
        report.history.average_daily_revenue, festival.average_daily_revenue
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
