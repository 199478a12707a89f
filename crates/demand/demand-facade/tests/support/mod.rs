//! Seeded synthetic demand for integration tests

#![allow(dead_code)]

use chrono::{Datelike, Days, NaiveDate};
use demand_facade::{DemandObservation, DemandSeries};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

pub const WEEKLY: [f64; 7] = [0.0, 150.0, 90.0, 60.0, 120.0, 300.0, -200.0];

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A year of daily demand from 2023-01-01: a 4000-passenger base with
/// Gaussian noise, a slow annual swing of ±30%, a weekly pattern, and 1500
/// extra passengers from 1 to 28 August.
pub fn synthetic_year(seed: u64) -> DemandSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 200.0).unwrap();
    let start = date(2023, 1, 1);

    let observations = (0..365u64)
        .map(|i| {
            let day = start + Days::new(i);
            let annual = 1.0 + 0.3 * (std::f64::consts::PI * i as f64 / 180.0).sin();
            let festival = if day.month() == 8 && day.day() <= 28 {
                1500.0
            } else {
                0.0
            };
            let base = 4000.0 + noise.sample(&mut rng);
            let passengers = base * annual + WEEKLY[i as usize % 7] + festival;
            DemandObservation::new(day, passengers.max(0.0))
        })
        .collect();

    DemandSeries::new(observations).unwrap()
}

/// Noise-free trend plus weekly pattern, `days` long from 2023-01-01.
pub fn clean_weekly(days: usize) -> DemandSeries {
    let values: Vec<f64> = (0..days)
        .map(|i| 4000.0 + 3.0 * i as f64 + WEEKLY[i % 7])
        .collect();
    DemandSeries::from_values(date(2023, 1, 1), &values).unwrap()
}

/// Standard rail tiers as a validated set.
pub fn standard_tiers() -> demand_facade::FareTierSet {
    demand_facade::TierConfig::build_set(&demand_facade::TierConfig::standard_rail()).unwrap()
}
