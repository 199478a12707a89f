//! Forward fill for demand series
//!
//! Decomposition and fitting need one reading per calendar day. Missing days
//! are inserted and every gap carries the last valid observation forward.

use chrono::Days;
use demand_spi::{DemandError, DemandObservation, DemandSeries, Result};
use tracing::debug;

/// Return a contiguous, gap-free copy of `series`.
///
/// A series whose first reading is missing has nothing to carry forward and
/// is rejected with [`DemandError::InvalidData`].
pub fn forward_fill(series: &DemandSeries) -> Result<DemandSeries> {
    let observations = series.observations();
    let first = observations.first().ok_or(DemandError::InsufficientData {
        required: 1,
        actual: 0,
    })?;
    let mut last_value = first.passengers.ok_or_else(|| {
        DemandError::InvalidData(format!(
            "series starts with a missing reading on {}; nothing to forward-fill from",
            first.date
        ))
    })?;

    let mut filled = Vec::with_capacity(observations.len());
    let mut inserted_days = 0usize;
    let mut filled_readings = 0usize;

    for obs in observations {
        // Insert calendar days skipped since the previous observation
        if let Some(prev) = filled.last().map(|o: &DemandObservation| o.date) {
            let mut next = prev + Days::new(1);
            while next < obs.date {
                filled.push(DemandObservation::new(next, last_value));
                inserted_days += 1;
                next = next + Days::new(1);
            }
        }

        match obs.passengers {
            Some(value) => last_value = value,
            None => filled_readings += 1,
        }
        filled.push(DemandObservation::new(obs.date, last_value));
    }

    if inserted_days > 0 || filled_readings > 0 {
        debug!(inserted_days, filled_readings, "forward-filled demand series");
    }

    DemandSeries::new(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, d).unwrap()
    }

    #[test]
    fn test_fills_missing_readings() {
        let series = DemandSeries::new(vec![
            DemandObservation::new(day(1), 100.0),
            DemandObservation::missing(day(2)),
            DemandObservation::missing(day(3)),
            DemandObservation::new(day(4), 130.0),
        ])
        .unwrap();

        let filled = forward_fill(&series).unwrap();
        assert_eq!(filled.values().unwrap(), vec![100.0, 100.0, 100.0, 130.0]);
        assert!(!filled.has_missing());
    }

    #[test]
    fn test_inserts_missing_days() {
        let series = DemandSeries::new(vec![
            DemandObservation::new(day(1), 100.0),
            DemandObservation::new(day(4), 130.0),
            DemandObservation::new(day(5), 140.0),
        ])
        .unwrap();

        let filled = forward_fill(&series).unwrap();
        assert!(filled.is_contiguous());
        assert_eq!(filled.len(), 5);
        assert_eq!(
            filled.values().unwrap(),
            vec![100.0, 100.0, 100.0, 130.0, 140.0]
        );
    }

    #[test]
    fn test_clean_series_is_unchanged() {
        let series = DemandSeries::from_values(day(1), &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(forward_fill(&series).unwrap(), series);
    }

    #[test]
    fn test_leading_missing_is_rejected() {
        let series = DemandSeries::new(vec![
            DemandObservation::missing(day(1)),
            DemandObservation::new(day(2), 10.0),
        ])
        .unwrap();
        assert!(matches!(
            forward_fill(&series),
            Err(DemandError::InvalidData(_))
        ));
    }

    #[test]
    fn test_empty_series() {
        let series = DemandSeries::new(vec![]).unwrap();
        assert_eq!(
            forward_fill(&series).unwrap_err(),
            DemandError::InsufficientData {
                required: 1,
                actual: 0
            }
        );
    }
}
