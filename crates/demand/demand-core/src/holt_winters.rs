//! Additive Holt-Winters (triple exponential smoothing)
//!
//! Model: `Y_t = level + trend + season + error`, with
//!
//! - `level_t  = α (Y_t − S_{t−P}) + (1 − α)(level_{t−1} + trend_{t−1})`
//! - `trend_t  = β (level_t − level_{t−1}) + (1 − β) trend_{t−1}`
//! - `S_t      = γ (Y_t − level_t) + (1 − γ) S_{t−P}`
//!
//! The smoothing weights are chosen by minimising the one-step-ahead sum of
//! squared errors: a coarse grid over `0 < α < 1`, `0 ≤ β ≤ 1`,
//! `0 ≤ γ ≤ 1 − α` is scanned in parallel, then refined by a compass search
//! that halves its step until it drops below the tolerance. Both stages are
//! deterministic, so identical input and options give identical forecasts.

use crate::fill::forward_fill;
use chrono::{Days, NaiveDate};
use demand_spi::{
    DemandError, DemandForecaster, DemandSeries, Forecast, ForecastPoint, Result, SmoothingParams,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

const ALPHA_MIN: f64 = 1e-4;
const ALPHA_MAX: f64 = 1.0 - 1e-4;

/// Finest coarse grid allowed; the grid grows with the cube of `1 / step`
pub const MIN_GRID_STEP: f64 = 0.01;

/// Optimizer settings for the smoothing-weight search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Spacing of the coarse parameter grid
    pub grid_step: f64,
    /// Compass search stops once its step is below this value
    pub tolerance: f64,
    /// Upper bound on compass search iterations
    pub max_iterations: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            grid_step: 0.05,
            tolerance: 1e-6,
            max_iterations: 10_000,
        }
    }
}

impl FitOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.grid_step.is_finite() || !(MIN_GRID_STEP..=0.5).contains(&self.grid_step) {
            return Err(DemandError::config(
                "grid_step",
                format!("must be within [{}, 0.5], got {}", MIN_GRID_STEP, self.grid_step),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(DemandError::config(
                "tolerance",
                format!("must be positive, got {}", self.tolerance),
            ));
        }
        if self.max_iterations == 0 {
            return Err(DemandError::config("max_iterations", "must be at least 1"));
        }
        Ok(())
    }
}

/// Additive-trend, additive-seasonal Holt-Winters forecaster
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use demand_core::HoltWinters;
/// use demand_spi::DemandSeries;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let values: Vec<f64> = (0..56)
///     .map(|i| 4000.0 + 5.0 * i as f64 + [0.0, 150.0, 90.0, 60.0, 120.0, 300.0, -200.0][i % 7])
///     .collect();
/// let series = DemandSeries::from_values(start, &values).unwrap();
///
/// let model = HoltWinters::weekly().fit(&series).unwrap();
/// let forecast = model.forecast(30).unwrap();
/// assert_eq!(forecast.len(), 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWinters {
    period: usize,
    options: FitOptions,
}

impl HoltWinters {
    /// Create a model with the given seasonal period (at least 2).
    pub fn new(period: usize) -> Result<Self> {
        if period < 2 {
            return Err(DemandError::config("period", "must be at least 2"));
        }
        Ok(Self {
            period,
            options: FitOptions::default(),
        })
    }

    /// Model with a seven-day cycle.
    pub fn weekly() -> Self {
        Self {
            period: crate::WEEKLY_PERIOD,
            options: FitOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn options(&self) -> FitOptions {
        self.options
    }

    /// Fit the model to the full history.
    ///
    /// Missing readings and days are forward-filled first.
    #[instrument(skip_all, fields(period = self.period, n = series.len()))]
    pub fn fit(&self, series: &DemandSeries) -> Result<FittedHoltWinters> {
        self.options.validate()?;

        let filled = forward_fill(series)?;
        let values = filled.values()?;
        let n = values.len();
        let required = 2 * self.period;
        if n < required {
            return Err(DemandError::InsufficientData {
                required,
                actual: n,
            });
        }
        check_degenerate(&values)?;
        let last_date = filled
            .last_date()
            .ok_or_else(|| DemandError::ModelFit("series has no dates".to_string()))?;

        let (params, sse) = optimize(&values, self.period, &self.options)?;

        let mut state = SmoothingState::initial(&values, self.period);
        let mut fitted_values = Vec::with_capacity(n - self.period);
        for (i, &value) in values.iter().enumerate().skip(self.period) {
            fitted_values.push(state.one_step(i));
            state.update(i, value, params);
        }

        info!(
            alpha = params.alpha,
            beta = params.beta,
            gamma = params.gamma,
            sse,
            "fitted Holt-Winters model"
        );

        Ok(FittedHoltWinters {
            params,
            period: self.period,
            level: state.level,
            trend: state.trend,
            seasonal: state.seasonal,
            sse,
            fitted_values,
            observations: n,
            last_date,
        })
    }
}

impl DemandForecaster for HoltWinters {
    fn forecast(&self, series: &DemandSeries, horizon: usize) -> Result<Forecast> {
        self.fit(series)?.forecast(horizon)
    }
}

/// Holt-Winters state after fitting the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedHoltWinters {
    params: SmoothingParams,
    period: usize,
    level: f64,
    trend: f64,
    /// Seasonal terms indexed by `observation index % period`
    seasonal: Vec<f64>,
    sse: f64,
    fitted_values: Vec<f64>,
    observations: usize,
    last_date: NaiveDate,
}

impl FittedHoltWinters {
    /// Project `horizon` days past the end of the history.
    pub fn forecast(&self, horizon: usize) -> Result<Forecast> {
        if horizon == 0 {
            return Err(DemandError::config("forecast_days", "must be at least 1"));
        }

        let points = (1..=horizon)
            .map(|h| {
                let date = self
                    .last_date
                    .checked_add_days(Days::new(h as u64))
                    .ok_or_else(|| {
                        DemandError::InvalidData(format!("forecast date overflow at step {}", h))
                    })?;
                let season = self.seasonal[(self.observations + h - 1) % self.period];
                Ok(ForecastPoint {
                    date,
                    passengers: self.level + h as f64 * self.trend + season,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(horizon, "projected demand forecast");
        Ok(Forecast::new(points, self.params))
    }

    pub fn params(&self) -> SmoothingParams {
        self.params
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Final level and trend
    pub fn components(&self) -> (f64, f64) {
        (self.level, self.trend)
    }

    /// Final seasonal terms, indexed by `observation index % period`
    pub fn seasonal_components(&self) -> &[f64] {
        &self.seasonal
    }

    /// One-step-ahead predictions for observations `period..n`
    pub fn fitted_values(&self) -> &[f64] {
        &self.fitted_values
    }

    /// In-sample sum of squared one-step-ahead errors
    pub fn sse(&self) -> f64 {
        self.sse
    }

    /// In-sample root mean squared one-step-ahead error
    pub fn rmse(&self) -> f64 {
        (self.sse / self.fitted_values.len() as f64).sqrt()
    }

    pub fn last_date(&self) -> NaiveDate {
        self.last_date
    }
}

#[derive(Debug, Clone)]
struct SmoothingState {
    level: f64,
    trend: f64,
    seasonal: Vec<f64>,
}

impl SmoothingState {
    /// Level from the first cycle, trend from the first two cycles,
    /// seasonal terms as first-cycle deviations from the level.
    fn initial(values: &[f64], period: usize) -> Self {
        let p = period as f64;
        let first_mean = values[..period].iter().sum::<f64>() / p;
        let second_mean = values[period..2 * period].iter().sum::<f64>() / p;

        Self {
            level: first_mean,
            trend: (second_mean - first_mean) / p,
            seasonal: values[..period].iter().map(|v| v - first_mean).collect(),
        }
    }

    fn one_step(&self, index: usize) -> f64 {
        self.level + self.trend + self.seasonal[index % self.seasonal.len()]
    }

    fn update(&mut self, index: usize, value: f64, params: SmoothingParams) {
        let slot = index % self.seasonal.len();
        let prev_level = self.level;
        let prev_seasonal = self.seasonal[slot];

        self.level = params.alpha * (value - prev_seasonal)
            + (1.0 - params.alpha) * (prev_level + self.trend);
        self.trend = params.beta * (self.level - prev_level) + (1.0 - params.beta) * self.trend;
        self.seasonal[slot] =
            params.gamma * (value - self.level) + (1.0 - params.gamma) * prev_seasonal;
    }
}

fn sum_squared_errors(values: &[f64], period: usize, params: SmoothingParams) -> f64 {
    let mut state = SmoothingState::initial(values, period);
    let mut sse = 0.0;
    for (i, &value) in values.iter().enumerate().skip(period) {
        let error = value - state.one_step(i);
        sse += error * error;
        state.update(i, value, params);
    }
    sse
}

fn check_degenerate(values: &[f64]) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(DemandError::ModelFit(
            "series contains non-finite values".to_string(),
        ));
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max - min <= f64::EPSILON * max.abs().max(1.0) {
        return Err(DemandError::ModelFit("series is constant".to_string()));
    }
    Ok(())
}

fn parameter_grid(step: f64) -> Vec<SmoothingParams> {
    let k = (1.0 / step).round() as usize;
    let mut grid = Vec::new();
    for a in 1..k {
        let alpha = a as f64 * step;
        for b in 0..=k {
            let beta = (b as f64 * step).min(1.0);
            for g in 0..=k {
                let gamma = g as f64 * step;
                if gamma > 1.0 - alpha + 1e-12 {
                    break;
                }
                grid.push(SmoothingParams::new(alpha, beta, gamma));
            }
        }
    }
    grid
}

fn admissible(params: SmoothingParams) -> SmoothingParams {
    let alpha = params.alpha.clamp(ALPHA_MIN, ALPHA_MAX);
    SmoothingParams {
        alpha,
        beta: params.beta.clamp(0.0, 1.0),
        gamma: params.gamma.clamp(0.0, 1.0 - alpha),
    }
}

fn neighbours(center: SmoothingParams, step: f64) -> Vec<SmoothingParams> {
    let SmoothingParams { alpha, beta, gamma } = center;
    [
        SmoothingParams::new(alpha + step, beta, gamma),
        SmoothingParams::new(alpha - step, beta, gamma),
        SmoothingParams::new(alpha, beta + step, gamma),
        SmoothingParams::new(alpha, beta - step, gamma),
        SmoothingParams::new(alpha, beta, gamma + step),
        SmoothingParams::new(alpha, beta, gamma - step),
    ]
    .into_iter()
    .map(admissible)
    .filter(|p| *p != center)
    .collect()
}

fn optimize(
    values: &[f64],
    period: usize,
    options: &FitOptions,
) -> Result<(SmoothingParams, f64)> {
    let grid = parameter_grid(options.grid_step);

    // Ties resolve to the earliest grid index
    let (index, _) = grid
        .par_iter()
        .enumerate()
        .map(|(idx, params)| (idx, sum_squared_errors(values, period, *params)))
        .filter(|(_, sse)| sse.is_finite())
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        .ok_or_else(|| {
            DemandError::ModelFit("objective is non-finite for every parameter candidate".to_string())
        })?;
    let mut best = admissible(grid[index]);
    let mut best_sse = sum_squared_errors(values, period, best);
    debug!(candidates = grid.len(), sse = best_sse, "grid search complete");

    let mut step = options.grid_step / 2.0;
    for iteration in 0..options.max_iterations {
        if step < options.tolerance {
            debug!(iteration, sse = best_sse, "compass search converged");
            return Ok((best, best_sse));
        }

        let mut improved: Option<(SmoothingParams, f64)> = None;
        for candidate in neighbours(best, step) {
            let sse = sum_squared_errors(values, period, candidate);
            let threshold = improved.map_or(best_sse, |(_, s)| s);
            if sse.is_finite() && sse < threshold {
                improved = Some((candidate, sse));
            }
        }

        match improved {
            Some((candidate, sse)) => {
                best = candidate;
                best_sse = sse;
            }
            None => step /= 2.0,
        }
    }

    Err(DemandError::ModelFit(format!(
        "optimizer did not converge after {} iterations",
        options.max_iterations
    )))
}
