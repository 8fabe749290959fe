// src/analytics/sweep.rs
//! Greeks as a function of the underlying price
//!
//! Evaluates [`greeks`] on an evenly spaced spot grid with everything else
//! held fixed. Points are independent, so the grid is evaluated in parallel
//! with Rayon; output order always follows the grid.

use crate::analytics::bs_analytic::{greeks, Greeks, OptionKind};
use crate::error::{validation::*, BsError, BsResult};
use bitflags::bitflags;
use rayon::prelude::*;
use tracing::debug;

bitflags! {
    /// Columns emitted when a sweep is written out
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GreekSet: u32 {
        const PRICE = 1 << 0;
        const DELTA = 1 << 1;
        const GAMMA = 1 << 2;
        const VEGA  = 1 << 3;
        const THETA = 1 << 4;
    }
}

impl GreekSet {
    /// Delta, Gamma, Vega and Theta
    pub const SENSITIVITIES: GreekSet = GreekSet::DELTA
        .union(GreekSet::GAMMA)
        .union(GreekSet::VEGA)
        .union(GreekSet::THETA);
}

#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub strike: f64,
    pub t: f64,
    pub r: f64,
    pub sigma: f64,
    pub kind: OptionKind,
    pub s_min: f64,
    pub s_max: f64,
    pub points: usize,
    pub columns: GreekSet,
}

impl SweepConfig {
    /// Validate the sweep configuration
    pub fn validate(&self) -> BsResult<()> {
        validate_positive("strike", self.strike)?;
        validate_finite("t", self.t)?;
        validate_finite("r", self.r)?;
        validate_finite("sigma", self.sigma)?;
        validate_positive("s_min", self.s_min)?;
        validate_positive("s_max", self.s_max)?;

        if self.s_min >= self.s_max {
            return Err(BsError::InvalidConfiguration {
                field: "s_min".to_string(),
                reason: format!("must be below s_max ({})", self.s_max),
            });
        }
        if self.points < 2 {
            return Err(BsError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "need at least 2 grid points".to_string(),
            });
        }
        if self.columns.is_empty() {
            return Err(BsError::InvalidConfiguration {
                field: "columns".to_string(),
                reason: "select at least one Greek".to_string(),
            });
        }
        Ok(())
    }

    /// Spot grid from `s_min` to `s_max`, both ends included
    pub fn spots(&self) -> Vec<f64> {
        let n = self.points;
        if n < 2 {
            return vec![self.s_min; n];
        }
        let step = (self.s_max - self.s_min) / (n - 1) as f64;
        (0..n)
            .map(|i| {
                if i == n - 1 {
                    self.s_max
                } else {
                    self.s_min + step * i as f64
                }
            })
            .collect()
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            strike: 100.0,
            t: 0.5,
            r: 0.03,
            sigma: 0.2,
            kind: OptionKind::Call,
            s_min: 50.0,
            s_max: 150.0,
            points: 100,
            columns: GreekSet::SENSITIVITIES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub spot: f64,
    pub greeks: Greeks,
}

/// Evaluate Greeks over the configured spot grid.
pub fn sweep_greeks_vs_spot(cfg: &SweepConfig) -> BsResult<Vec<SweepPoint>> {
    cfg.validate()?;
    debug!(
        s_min = cfg.s_min,
        s_max = cfg.s_max,
        points = cfg.points,
        kind = %cfg.kind,
        "sweeping greeks over spot"
    );

    let points = cfg
        .spots()
        .into_par_iter()
        .map(|spot| SweepPoint {
            spot,
            greeks: greeks(spot, cfg.strike, cfg.t, cfg.r, cfg.sigma, cfg.kind),
        })
        .collect();
    Ok(points)
}
