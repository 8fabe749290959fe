//! # bs-greeks: Closed-Form Black-Scholes Pricing and Greeks
//!
//! A Rust library for pricing European vanilla options under the Black-Scholes
//! model and computing their first-order risk sensitivities.
//!
//! ## Key Features
//!
//! - **Closed Form**: price, Delta, Gamma, Vega and Theta from one d₁/d₂ evaluation
//! - **Accurate Tails**: normal CDF through `erfc`, not a polynomial fit
//! - **Total Functions**: zero expiry or zero volatility are floored, never NaN
//! - **Sweeps**: Greeks across a spot grid, evaluated in parallel with Rayon
//! - **Reports**: human-readable summaries and CSV output
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::{greeks, OptionKind};
//!
//! let g = greeks(100.0, 100.0, 0.5, 0.03, 0.20, OptionKind::Call);
//! println!("price {:.4}  delta {:.4}  theta/day {:.4}", g.price, g.delta, g.theta_per_day());
//! assert!(g.delta > 0.0 && g.delta < 1.0);
//! ```
//!
//! ## Units
//!
//! Vega is per 1.00 of volatility and Theta is per year; see
//! [`Greeks::vega_per_pct`] and [`Greeks::theta_per_day`] for trader units.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod analytics;
pub mod output;

// Re-export commonly used types for convenience
pub use error::{BsError, BsResult};
pub use analytics::bs_analytic::{d1, d2, greeks, price, Greeks, MarketInputs, OptionKind};
