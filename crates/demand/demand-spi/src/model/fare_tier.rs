//! Fare tiers and fare-class mixes
//!
//! Both are validated when constructed: shares are finite, within [0, 1] and
//! sum to 1.0 within [`ALLOCATION_TOLERANCE`], names are non-empty and unique.

use crate::error::{DemandError, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Allowed deviation of summed allocation fractions from 1.0
pub const ALLOCATION_TOLERANCE: f64 = 1e-6;

/// A named price point with a fixed share of total demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareTier {
    name: String,
    unit_price: f64,
    allocation_fraction: f64,
}

impl FareTier {
    pub fn new(name: impl Into<String>, unit_price: f64, allocation_fraction: f64) -> Result<Self> {
        let name = validate_name(name.into())?;
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(DemandError::config(
                "unit_price",
                format!("price for '{}' must be finite and non-negative, got {}", name, unit_price),
            ));
        }
        validate_share("allocation_fraction", &name, allocation_fraction)?;

        Ok(Self {
            name,
            unit_price,
            allocation_fraction,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn allocation_fraction(&self) -> f64 {
        self.allocation_fraction
    }
}

/// Fare tiers whose allocation fractions sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareTierSet {
    tiers: Vec<FareTier>,
}

impl FareTierSet {
    pub fn new(tiers: Vec<FareTier>) -> Result<Self> {
        validate_mix(
            "allocation_fraction",
            tiers.iter().map(|t| (t.name.as_str(), t.allocation_fraction)),
        )?;
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[FareTier] {
        &self.tiers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FareTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FareTier> {
        self.tiers.iter().find(|t| t.name == name)
    }

    /// Revenue earned per passenger: `Σ fraction_i × price_i`.
    pub fn revenue_per_passenger(&self) -> f64 {
        self.tiers
            .iter()
            .map(|t| t.allocation_fraction * t.unit_price)
            .sum()
    }
}

impl<'a> IntoIterator for &'a FareTierSet {
    type Item = &'a FareTier;
    type IntoIter = std::slice::Iter<'a, FareTier>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}

/// A seat-inventory fare class with its share of capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareClass {
    name: String,
    allocation_ratio: f64,
}

impl FareClass {
    pub fn new(name: impl Into<String>, allocation_ratio: f64) -> Result<Self> {
        let name = validate_name(name.into())?;
        validate_share("allocation_ratio", &name, allocation_ratio)?;
        Ok(Self {
            name,
            allocation_ratio,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn allocation_ratio(&self) -> f64 {
        self.allocation_ratio
    }
}

/// Fare classes whose allocation ratios sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareClassMix {
    classes: Vec<FareClass>,
}

impl FareClassMix {
    pub fn new(classes: Vec<FareClass>) -> Result<Self> {
        validate_mix(
            "allocation_ratio",
            classes.iter().map(|c| (c.name.as_str(), c.allocation_ratio)),
        )?;
        Ok(Self { classes })
    }

    pub fn classes(&self) -> &[FareClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

fn validate_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(DemandError::config("name", "must not be empty"));
    }
    Ok(name)
}

fn validate_share(field: &str, name: &str, share: f64) -> Result<()> {
    if !share.is_finite() || !(0.0..=1.0).contains(&share) {
        return Err(DemandError::config(
            field,
            format!("share for '{}' must be within [0, 1], got {}", name, share),
        ));
    }
    Ok(())
}

fn validate_mix<'a>(field: &str, shares: impl Iterator<Item = (&'a str, f64)>) -> Result<()> {
    let mut seen = HashSet::new();
    let mut sum = 0.0;
    let mut count = 0;

    for (name, share) in shares {
        if !seen.insert(name) {
            return Err(DemandError::config(
                "name",
                format!("duplicate entry '{}'", name),
            ));
        }
        sum += share;
        count += 1;
    }

    if count == 0 {
        return Err(DemandError::config(field, "at least one entry is required"));
    }
    if (sum - 1.0).abs() > ALLOCATION_TOLERANCE {
        return Err(DemandError::config(
            field,
            format!("shares must sum to 1.0, got {:.6}", sum),
        ));
    }
    Ok(())
}
