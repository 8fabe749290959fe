pub mod bs_analytic;
pub mod sweep;
