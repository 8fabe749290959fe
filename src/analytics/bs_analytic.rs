// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x).
//!
//! # Degenerate inputs
//!
//! Time to expiry and volatility are floored at [`MIN_TIME`] and [`MIN_VOL`]
//! before they enter d₁/d₂, so `T = 0` or `σ = 0` yield finite numbers
//! rather than NaN. Spot and strike are not checked here: callers guarantee
//! `S > 0` and `K > 0`, or go through [`MarketInputs::new`].

use crate::error::{validation::*, BsError, BsResult};
use crate::math_utils::{norm_cdf, norm_pdf};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Floor applied to time to expiry (years)
pub const MIN_TIME: f64 = 1e-8;

/// Floor applied to volatility
pub const MIN_VOL: f64 = 1e-8;

/// European option kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = BsError;

    fn from_str(s: &str) -> BsResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(BsError::InvalidArgument(format!(
                "option kind must be 'call' or 'put', got '{}'",
                other
            ))),
        }
    }
}

/// Price and first-order sensitivities for one set of inputs
///
/// All five fields come from the same clamped parameters, see [`greeks`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per 1.00 of volatility
    pub vega: f64,
    /// ∂V/∂t per year
    pub theta: f64,
}

impl Greeks {
    /// Vega per one percentage point of volatility
    pub fn vega_per_pct(&self) -> f64 {
        self.vega / 100.0
    }

    /// Theta per calendar day
    pub fn theta_per_day(&self) -> f64 {
        self.theta / 365.0
    }
}

/// Market parameters after the time/volatility floor has been applied.
///
/// Built once per call and passed by value to every sub-formula.
#[derive(Debug, Clone, Copy)]
struct NormalizedParams {
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    sigma: f64,
}

impl NormalizedParams {
    fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Self {
        NormalizedParams {
            s,
            k,
            t: t.max(MIN_TIME),
            r,
            sigma: sigma.max(MIN_VOL),
        }
    }

    fn sigma_sqrt_t(self) -> f64 {
        self.sigma * self.t.sqrt()
    }

    fn d1(self) -> f64 {
        ((self.s / self.k).ln() + (self.r + 0.5 * self.sigma * self.sigma) * self.t)
            / self.sigma_sqrt_t()
    }

    fn d2(self) -> f64 {
        self.d1() - self.sigma_sqrt_t()
    }
}

/// Closed-form price given the normalized parameters and a discount factor.
fn price_with_discount(p: NormalizedParams, discount: f64, kind: OptionKind) -> f64 {
    let d1v = p.d1();
    let d2v = p.d2();
    match kind {
        OptionKind::Call => p.s * norm_cdf(d1v) - p.k * discount * norm_cdf(d2v),
        OptionKind::Put => p.k * discount * norm_cdf(-d2v) - p.s * norm_cdf(-d1v),
    }
}

/// Black-Scholes d₁
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// ```
///
/// `t` and `sigma` are floored at 1e-8 first.
pub fn d1(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    NormalizedParams::new(s, k, t, r, sigma).d1()
}

/// Black-Scholes d₂ = d₁ - σ√T, using the same floored `t` and `sigma` as [`d1`].
pub fn d2(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    NormalizedParams::new(s, k, t, r, sigma).d2()
}

/// Black-Scholes European option price
///
/// # Formula
/// ```text
/// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// The discount factor uses the raw `t`, so `t = 0` discounts by exactly 1;
/// only d₁/d₂ see the floored value.
pub fn price(s: f64, k: f64, t: f64, r: f64, sigma: f64, kind: OptionKind) -> f64 {
    let params = NormalizedParams::new(s, k, t, r, sigma);
    price_with_discount(params, (-r * t).exp(), kind)
}

/// Black-Scholes price, Delta, Gamma, Vega and Theta
///
/// # Formulas
/// ```text
/// Δ_call = Φ(d₁)                 Δ_put = Φ(d₁) - 1
/// Γ      = φ(d₁) / (S σ √T)
/// ν      = S φ(d₁) √T
/// Θ_call = -S φ(d₁) σ / (2√T) - r K e^(-rT) Φ(d₂)
/// Θ_put  = -S φ(d₁) σ / (2√T) + r K e^(-rT) Φ(-d₂)
/// ```
///
/// `t` and `sigma` are floored once and every quantity, including the price
/// and its discount factor, is computed from those floored values.
pub fn greeks(s: f64, k: f64, t: f64, r: f64, sigma: f64, kind: OptionKind) -> Greeks {
    let p = NormalizedParams::new(s, k, t, r, sigma);
    let d1v = p.d1();
    let d2v = p.d2();
    let sqrt_t = p.t.sqrt();
    let pdf = norm_pdf(d1v);
    let discount = (-p.r * p.t).exp();

    let price = price_with_discount(p, discount, kind);
    let decay = -(p.s * pdf * p.sigma) / (2.0 * sqrt_t);

    let (delta, theta) = match kind {
        OptionKind::Call => (
            norm_cdf(d1v),
            decay - p.r * p.k * discount * norm_cdf(d2v),
        ),
        OptionKind::Put => (
            norm_cdf(d1v) - 1.0,
            decay + p.r * p.k * discount * norm_cdf(-d2v),
        ),
    };

    Greeks {
        price,
        delta,
        gamma: pdf / (p.s * p.sigma * sqrt_t),
        vega: p.s * pdf * sqrt_t,
        theta,
    }
}

/// Validated contract and market inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    pub spot: f64,
    pub strike: f64,
    /// Time to expiry in years
    pub t: f64,
    pub r: f64,
    pub sigma: f64,
    pub kind: OptionKind,
}

impl MarketInputs {
    /// Build inputs, rejecting non-positive spot/strike and non-finite values.
    ///
    /// `t <= 0` and `sigma <= 0` are accepted; they are floored when priced.
    pub fn new(
        spot: f64,
        strike: f64,
        t: f64,
        r: f64,
        sigma: f64,
        kind: OptionKind,
    ) -> BsResult<Self> {
        validate_positive("spot", spot)?;
        validate_positive("strike", strike)?;
        validate_finite("t", t)?;
        validate_finite("r", r)?;
        validate_finite("sigma", sigma)?;

        Ok(MarketInputs {
            spot,
            strike,
            t,
            r,
            sigma,
            kind,
        })
    }

    /// True when `t` or `sigma` falls below its floor
    pub fn is_degenerate(&self) -> bool {
        self.t < MIN_TIME || self.sigma < MIN_VOL
    }

    pub fn price(&self) -> f64 {
        price(self.spot, self.strike, self.t, self.r, self.sigma, self.kind)
    }

    pub fn greeks(&self) -> Greeks {
        greeks(self.spot, self.strike, self.t, self.r, self.sigma, self.kind)
    }
}
