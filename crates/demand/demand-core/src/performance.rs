//! Daily revenue and headline performance figures
//!
//! Each day's passengers are priced through the fare-tier mix, so daily
//! revenue is `passengers × Σ fraction_i × price_i`.

use chrono::NaiveDate;
use demand_spi::{
    DailyRevenue, DemandError, DemandSeries, FareTierSet, PerformanceSummary, Result,
};

/// Revenue for every day of a gap-free series.
pub fn daily_revenue(series: &DemandSeries, tiers: &FareTierSet) -> Result<Vec<DailyRevenue>> {
    let per_passenger = tiers.revenue_per_passenger();
    let values = series.values()?;

    Ok(series
        .dates()
        .into_iter()
        .zip(values)
        .map(|(date, passengers)| DailyRevenue {
            date,
            passengers,
            revenue: passengers * per_passenger,
        })
        .collect())
}

/// Average and peak daily figures over the whole series.
pub fn summarize(series: &DemandSeries, tiers: &FareTierSet) -> Result<PerformanceSummary> {
    let days = daily_revenue(series, tiers)?;
    let n = days.len();
    // The first maximum wins on ties
    let peak = days
        .iter()
        .reduce(|best, day| if day.passengers > best.passengers { day } else { best })
        .ok_or(DemandError::InsufficientData {
            required: 1,
            actual: 0,
        })?;

    Ok(PerformanceSummary {
        days: n,
        average_daily_passengers: days.iter().map(|d| d.passengers).sum::<f64>() / n as f64,
        peak_day_passengers: peak.passengers,
        peak_day: peak.date,
        average_daily_revenue: days.iter().map(|d| d.revenue).sum::<f64>() / n as f64,
        peak_daily_revenue: days.iter().map(|d| d.revenue).fold(f64::MIN, f64::max),
    })
}

/// [`summarize`] restricted to `start..=end`, e.g. an event period.
pub fn summarize_window(
    series: &DemandSeries,
    tiers: &FareTierSet,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<PerformanceSummary> {
    if start > end {
        return Err(DemandError::config(
            "window",
            format!("start {} is after end {}", start, end),
        ));
    }
    summarize(&series.window(start, end), tiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use demand_spi::{DemandObservation, FareTier};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 8, d).unwrap()
    }

    fn two_tiers() -> FareTierSet {
        // 0.5 × 10 + 0.5 × 30 = 20 per passenger
        FareTierSet::new(vec![
            FareTier::new("Saver", 10.0, 0.5).unwrap(),
            FareTier::new("Anytime", 30.0, 0.5).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_daily_revenue() {
        let series = DemandSeries::from_values(day(1), &[100.0, 50.0]).unwrap();
        let days = daily_revenue(&series, &two_tiers()).unwrap();
        assert_eq!(days.len(), 2);
        assert!((days[0].revenue - 2000.0).abs() < 1e-9);
        assert!((days[1].revenue - 1000.0).abs() < 1e-9);
        assert_eq!(days[1].date, day(2));
    }

    #[test]
    fn test_summarize() {
        let series = DemandSeries::from_values(day(1), &[100.0, 300.0, 200.0]).unwrap();
        let summary = summarize(&series, &two_tiers()).unwrap();

        assert_eq!(summary.days, 3);
        assert!((summary.average_daily_passengers - 200.0).abs() < 1e-9);
        assert_eq!(summary.peak_day, day(2));
        assert!((summary.peak_day_passengers - 300.0).abs() < 1e-9);
        assert!((summary.average_daily_revenue - 4000.0).abs() < 1e-9);
        assert!((summary.peak_daily_revenue - 6000.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_window() {
        let series = DemandSeries::from_values(day(1), &[100.0, 300.0, 200.0, 400.0]).unwrap();
        let summary = summarize_window(&series, &two_tiers(), day(3), day(4)).unwrap();
        assert_eq!(summary.days, 2);
        assert!((summary.average_daily_passengers - 300.0).abs() < 1e-9);
        assert_eq!(summary.peak_day, day(4));
    }

    #[test]
    fn test_empty_window() {
        let series = DemandSeries::from_values(day(1), &[100.0]).unwrap();
        let err = summarize_window(&series, &two_tiers(), day(10), day(12)).unwrap_err();
        assert!(matches!(err, DemandError::InsufficientData { .. }));
        assert!(summarize_window(&series, &two_tiers(), day(12), day(10)).is_err());
    }

    #[test]
    fn test_missing_values_rejected() {
        let series = DemandSeries::new(vec![
            DemandObservation::new(day(1), 10.0),
            DemandObservation::missing(day(2)),
        ])
        .unwrap();
        assert!(matches!(
            summarize(&series, &two_tiers()),
            Err(DemandError::InvalidData(_))
        ));
    }
}
