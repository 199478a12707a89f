//! Additive seasonal decomposition: Y = T + S + R
//!
//! The trend is a centred moving average over one seasonal period. The
//! moving average leaves `period / 2` points undefined at each end; those are
//! filled by extending a least-squares line through the nearest `period - 1`
//! defined trend points (at the tail, excluding the outermost one), so every
//! component covers the full series.

use demand_spi::{Decomposer, DemandError, DemandSeries, Result, SeasonalDecomposition};
use tracing::debug;

/// Additive decomposition over a fixed seasonal period
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveDecomposer;

impl AdditiveDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl Decomposer for AdditiveDecomposer {
    fn decompose(&self, series: &DemandSeries, period: usize) -> Result<SeasonalDecomposition> {
        decompose_additive(series, period)
    }
}

/// Perform additive decomposition of a forward-filled series.
pub fn decompose_additive(series: &DemandSeries, period: usize) -> Result<SeasonalDecomposition> {
    if period < 2 {
        return Err(DemandError::config("period", "must be at least 2"));
    }
    let n = series.len();
    if n < 2 * period {
        return Err(DemandError::InsufficientData {
            required: 2 * period,
            actual: n,
        });
    }
    if !series.is_contiguous() {
        return Err(DemandError::InvalidData(
            "series has missing days; forward-fill the series first".to_string(),
        ));
    }
    let observed = series.values()?;

    let trend = extrapolated_trend(&observed, period);
    let detrended: Vec<f64> = observed.iter().zip(&trend).map(|(y, t)| y - t).collect();

    // Per-phase means, centred so one full cycle sums to zero
    let mut pattern: Vec<f64> = (0..period)
        .map(|phase| {
            let values: Vec<f64> = detrended.iter().skip(phase).step_by(period).copied().collect();
            values.iter().sum::<f64>() / values.len() as f64
        })
        .collect();
    let pattern_mean = pattern.iter().sum::<f64>() / period as f64;
    for p in pattern.iter_mut() {
        *p -= pattern_mean;
    }

    let seasonal: Vec<f64> = (0..n).map(|i| pattern[i % period]).collect();
    let residual: Vec<f64> = observed
        .iter()
        .zip(&trend)
        .zip(&seasonal)
        .map(|((y, t), s)| y - t - s)
        .collect();

    debug!(n, period, "decomposed demand series");

    Ok(SeasonalDecomposition::new(
        period,
        series.dates(),
        observed,
        trend,
        seasonal,
        residual,
    ))
}

/// Centred moving average, `None` where the window does not fit.
///
/// Odd periods use a plain window of `period` points; even periods use the
/// 2×period filter with half weights on the two outermost points.
fn centered_moving_average(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = data.len();
    let half = period / 2;
    let weights: Vec<f64> = if period % 2 == 1 {
        vec![1.0 / period as f64; period]
    } else {
        let mut w = vec![1.0 / period as f64; period + 1];
        w[0] = 0.5 / period as f64;
        w[period] = 0.5 / period as f64;
        w
    };

    (0..n)
        .map(|i| {
            if i < half || i + half >= n {
                None
            } else {
                let window = &data[i - half..=i + half];
                Some(window.iter().zip(&weights).map(|(x, w)| x * w).sum())
            }
        })
        .collect()
}

fn extrapolated_trend(data: &[f64], period: usize) -> Vec<f64> {
    let averaged = centered_moving_average(data, period);
    let n = data.len();
    let half = period / 2;
    // n >= 2 * period guarantees at least period + 1 defined points
    let front = half;
    let back = n - half - 1;
    let npoints = (period - 1).max(2);

    let mut trend: Vec<f64> = averaged.iter().map(|v| v.unwrap_or(f64::NAN)).collect();

    let head_end = (front + npoints).min(back + 1);
    let (slope, intercept) = fit_line(front, &trend[front..head_end]);
    for (i, t) in trend.iter_mut().enumerate().take(front) {
        *t = slope * i as f64 + intercept;
    }

    // The tail line stops one short of the last defined point
    let tail_start = back.saturating_sub(npoints).max(front);
    let tail_end = back.max(tail_start + 1);
    let (slope, intercept) = fit_line(tail_start, &trend[tail_start..tail_end]);
    for (i, t) in trend.iter_mut().enumerate().skip(back + 1) {
        *t = slope * i as f64 + intercept;
    }

    trend
}

/// Least-squares line through `(offset + k, values[k])`.
fn fit_line(offset: usize, values: &[f64]) -> (f64, f64) {
    let m = values.len() as f64;
    let xs: Vec<f64> = (0..values.len()).map(|k| (offset + k) as f64).collect();
    let x_mean = xs.iter().sum::<f64>() / m;
    let y_mean = values.iter().sum::<f64>() / m;

    let sxx: f64 = xs.iter().map(|x| (x - x_mean).powi(2)).sum();
    if sxx.abs() < 1e-12 {
        return (0.0, y_mean);
    }
    let sxy: f64 = xs
        .iter()
        .zip(values)
        .map(|(x, y)| (x - x_mean) * (y - y_mean))
        .sum();

    let slope = sxy / sxx;
    (slope, y_mean - slope * x_mean)
}
