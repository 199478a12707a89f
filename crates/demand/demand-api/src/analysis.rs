//! End-to-end revenue analysis.
//!
//! Runs forward fill, decomposition, forecasting, revenue allocation, the
//! pricing what-if, elasticity adjustment, inventory allocation and the
//! historical summary over a single demand series.

use crate::config::{AnalysisConfig, TierConfig};
use demand_core::{
    allocate_revenue, forward_fill, price_change_grid, summarize, AdditiveDecomposer,
    ElasticityModel, ForecastAccuracy, HoltWinters, InventoryAllocator, PricingScenario,
};
use demand_spi::{
    Decomposer, DemandSeries, ElasticityScenario, FareTierSet, Forecast, PerformanceSummary,
    PricingComparison, Result, RevenueBreakdown, SeasonalDecomposition, SeatAllocation,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Everything produced by one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub decomposition: SeasonalDecomposition,
    pub forecast: Forecast,
    /// In-sample one-step-ahead accuracy of the fitted model
    pub fit_accuracy: ForecastAccuracy,
    /// Mean forecast daily demand, floored at zero; revenue, the pricing
    /// comparison and seats are based on it
    pub forecast_daily_demand: f64,
    pub forecast_revenue: RevenueBreakdown,
    pub pricing: PricingComparison,
    /// History scaled for the configured price change
    pub adjusted_history: DemandSeries,
    pub elasticity_sweep: Vec<ElasticityScenario>,
    pub inventory: Vec<SeatAllocation>,
    pub history: PerformanceSummary,
}

/// Validated analysis pipeline, reusable across series
pub struct RevenueAnalysis {
    config: AnalysisConfig,
    decomposer: Box<dyn Decomposer>,
    forecaster: HoltWinters,
    tiers: FareTierSet,
    pricing: PricingScenario,
    elasticity: ElasticityModel,
    price_changes: Vec<f64>,
    inventory: InventoryAllocator,
}

impl RevenueAnalysis {
    /// Validate `config` and build every stage.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.forecast.validate()?;
        let forecaster =
            HoltWinters::new(config.forecast.period)?.with_options(config.forecast.fit);

        let tiers = TierConfig::build_set(&config.tiers)?;
        let pricing = PricingScenario::new(
            TierConfig::build_set(&config.pricing.current)?,
            TierConfig::build_set(&config.pricing.proposed)?,
            config.pricing.demand_discount,
        )?;

        let elasticity = ElasticityModel::new(config.elasticity.coefficient)?;
        elasticity.multiplier(config.elasticity.price_change)?;
        let price_changes = price_change_grid(
            config.elasticity.sweep_min,
            config.elasticity.sweep_max,
            config.elasticity.sweep_steps,
        )?;
        for &change in &price_changes {
            elasticity.multiplier(change)?;
        }

        let inventory =
            InventoryAllocator::new(config.inventory.build_mix()?, config.inventory.demand_multiplier)?;

        Ok(Self {
            config,
            decomposer: Box::new(AdditiveDecomposer::new()),
            forecaster,
            tiers,
            pricing,
            elasticity,
            price_changes,
            inventory,
        })
    }

    /// Replace the additive decomposition stage.
    pub fn with_decomposer(mut self, decomposer: Box<dyn Decomposer>) -> Self {
        self.decomposer = decomposer;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    #[instrument(skip_all, fields(n = series.len()))]
    pub fn run(&self, series: &DemandSeries) -> Result<AnalysisReport> {
        let filled = forward_fill(series)?;
        let period = self.config.forecast.period;

        let decomposition = self.decomposer.decompose(&filled, period)?;
        debug!(period, "decomposition complete");

        let fitted = self.forecaster.fit(&filled)?;
        let forecast = fitted.forecast(self.config.forecast.forecast_days)?;
        let values = filled.values()?;
        let fit_accuracy = ForecastAccuracy::compute(&values[period..], fitted.fitted_values())?;

        let demand = planning_demand(&forecast);
        let forecast_revenue = allocate_revenue(demand, &self.tiers);
        let pricing = self.pricing.compare(demand);

        let adjusted_history = self
            .elasticity
            .adjust(&filled, self.config.elasticity.price_change)?;
        let elasticity_sweep = self.elasticity.sweep(&filled, &self.price_changes)?;

        let inventory = self.inventory.allocate(demand);
        let history = summarize(&filled, &self.tiers)?;

        info!(
            forecast_daily_demand = demand,
            forecast_revenue = forecast_revenue.total_revenue,
            rmse = fit_accuracy.rmse,
            "revenue analysis complete"
        );

        Ok(AnalysisReport {
            decomposition,
            forecast,
            fit_accuracy,
            forecast_daily_demand: demand,
            forecast_revenue,
            pricing,
            adjusted_history,
            elasticity_sweep,
            inventory,
            history,
        })
    }
}

/// Forecast mean daily demand, floored at zero passengers.
fn planning_demand(forecast: &Forecast) -> f64 {
    let mean = forecast.mean();
    if mean < 0.0 {
        warn!(mean, "forecast mean demand is negative; planning on zero");
        return 0.0;
    }
    mean
}
