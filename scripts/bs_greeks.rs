// scripts/bs_greeks.rs
//! Black-Scholes price & Greeks calculator
//!
//! ```text
//! bs-greeks --spot 100 --strike 100 -T 0.5 --sigma 0.2 --r 0.03 --type call --report
//! bs-greeks --demo
//! bs-greeks --sweep greeks.csv --type put
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use bs_greeks::analytics::sweep::{sweep_greeks_vs_spot, GreekSet, SweepConfig};
use bs_greeks::output::{write_report, write_sweep_csv_file};
use bs_greeks::{d1, d2, greeks, BsResult, MarketInputs, OptionKind};
use bs_greeks::math_utils::{norm_cdf, norm_pdf};
use clap::Parser;
use std::io::{self, Write};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_INPUTS: (f64, f64, f64, f64, f64) = (100.0, 100.0, 0.5, 0.03, 0.20);

/// Black–Scholes price & Greeks calculator
#[derive(Parser, Debug)]
#[command(name = "bs-greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Underlying price (e.g., 100)
    #[arg(short = 'S', long, alias = "S")]
    spot: Option<f64>,

    /// Strike price (e.g., 100)
    #[arg(short = 'K', long, alias = "K")]
    strike: Option<f64>,

    /// Time to expiry in YEARS (e.g., 0.0822 for 30 days)
    #[arg(short = 'T', long = "t", alias = "T")]
    t: Option<f64>,

    /// Volatility (annual, decimal, e.g., 0.2)
    #[arg(long)]
    sigma: Option<f64>,

    /// Risk-free rate (annual, decimal) [default: 0.0]
    #[arg(long, allow_negative_numbers = true)]
    r: Option<f64>,

    /// Option type: call or put
    #[arg(long = "type", default_value = "call")]
    kind: String,

    /// Print a neat report
    #[arg(long)]
    report: bool,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "report")]
    json: bool,

    /// Run demo with preset inputs when inputs are missing
    #[arg(long)]
    demo: bool,

    /// Print reference values for the demo inputs and exit
    #[arg(long)]
    smoke: bool,

    /// Write Greeks vs spot (50..150) to this CSV file and exit
    #[arg(long, value_name = "FILE")]
    sweep: Option<String>,

    /// Grid points for --sweep
    #[arg(long, default_value_t = 100)]
    points: usize,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    if let Err(e) = run(cli, &mut stdout) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run<W: Write>(cli: Cli, out: &mut W) -> BsResult<()> {
    let kind: OptionKind = cli.kind.parse()?;

    if cli.smoke {
        info!("running smoke test");
        return smoke_test(out);
    }

    if let Some(path) = cli.sweep.as_deref() {
        let defaults = SweepConfig::default();
        let cfg = SweepConfig {
            strike: cli.strike.unwrap_or(defaults.strike),
            t: cli.t.unwrap_or(defaults.t),
            r: cli.r.unwrap_or(defaults.r),
            sigma: cli.sigma.unwrap_or(defaults.sigma),
            kind,
            points: cli.points,
            columns: GreekSet::all(),
            ..defaults
        };
        let points = sweep_greeks_vs_spot(&cfg)?;
        write_sweep_csv_file(path, &points, cfg.columns)?;
        info!(path, rows = points.len(), "sweep written");
        writeln!(out, "Wrote {} rows to {}", points.len(), path)?;
        return Ok(());
    }

    let (spot, strike, t, sigma) = match (cli.spot, cli.strike, cli.t, cli.sigma) {
        (Some(s), Some(k), Some(t), Some(sigma)) => (s, k, t, sigma),
        _ if cli.demo => {
            info!("inputs missing, running demo");
            let (s, k, t, r, sigma) = DEMO_INPUTS;
            let inputs = MarketInputs::new(s, k, t, r, sigma, OptionKind::Call)?;
            write_report(out, &inputs, &inputs.greeks())?;
            return Ok(());
        }
        _ => {
            writeln!(out, "Missing inputs. Example:")?;
            writeln!(
                out,
                "  bs-greeks --spot 100 --strike 100 -T 0.5 --sigma 0.2 --r 0.03 --type call --report"
            )?;
            writeln!(out, "Or try:  bs-greeks --demo")?;
            return Ok(());
        }
    };

    let inputs = MarketInputs::new(spot, strike, t, cli.r.unwrap_or(0.0), sigma, kind)?;
    if inputs.is_degenerate() {
        warn!(t, sigma, "expiry or volatility floored at 1e-8");
    }
    let g = inputs.greeks();

    if cli.report {
        write_report(out, &inputs, &g)?;
    } else if cli.json {
        serde_json::to_writer_pretty(&mut *out, &g)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{:?}", g)?;
    }
    Ok(())
}

fn smoke_test<W: Write>(out: &mut W) -> BsResult<()> {
    writeln!(out, "Running smoke test…")?;
    writeln!(out, "φ(0)  = {:.5}", norm_pdf(0.0))?;
    writeln!(out, "N(0)  = {:.5}", norm_cdf(0.0))?;
    writeln!(out, "N(1)  = {:.5}", norm_cdf(1.0))?;

    let (s, k, t, r, sigma) = DEMO_INPUTS;
    writeln!(out, "d1 ≈ {:.6}", d1(s, k, t, r, sigma))?;
    writeln!(out, "d2 ≈ {:.6}", d2(s, k, t, r, sigma))?;

    let g_call = greeks(s, k, t, r, sigma, OptionKind::Call);
    let g_put = greeks(s, k, t, r, sigma, OptionKind::Put);
    writeln!(out, "Call Greeks: {:?}", g_call)?;
    writeln!(out, "Put  Greeks: {:?}", g_put)?;

    let inputs = MarketInputs::new(s, k, t, r, sigma, OptionKind::Call)?;
    write_report(out, &inputs, &g_call)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bs_greeks::output::format_report;
    use bs_greeks::{BsError, Greeks};

    fn run_args(args: &[&str]) -> BsResult<String> {
        let cli = Cli::try_parse_from(std::iter::once("bs-greeks").chain(args.iter().copied()))
            .expect("arguments should parse");
        let mut buf = Vec::new();
        run(cli, &mut buf)?;
        Ok(String::from_utf8(buf).expect("utf-8 output"))
    }

    const FULL: [&str; 8] = ["--spot", "100", "--strike", "100", "-T", "0.5", "--sigma", "0.2"];

    #[test]
    fn test_missing_inputs_prints_usage() {
        let out = run_args(&["--spot", "100", "--strike", "100"]).unwrap();
        assert!(out.starts_with("Missing inputs. Example:"));
        assert!(out.contains("bs-greeks --demo"));
    }

    #[test]
    fn test_demo_renders_fixed_report() {
        let out = run_args(&["--demo"]).unwrap();
        let inputs = MarketInputs::new(100.0, 100.0, 0.5, 0.03, 0.20, OptionKind::Call).unwrap();
        assert_eq!(out, format_report(&inputs, &inputs.greeks()));
        assert!(out.contains("Price      : 6.371028"));
    }

    #[test]
    fn test_unknown_type_is_invalid_argument() {
        let mut args = FULL.to_vec();
        args.extend(["--type", "straddle"]);
        match run_args(&args) {
            Err(BsError::InvalidArgument(msg)) => assert!(msg.contains("straddle")),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_defaults_to_zero() {
        let out = run_args(&FULL).unwrap();
        let expected = greeks(100.0, 100.0, 0.5, 0.0, 0.2, OptionKind::Call);
        assert_eq!(out, format!("{:?}\n", expected));
    }

    #[test]
    fn test_json_output() {
        let mut args = FULL.to_vec();
        args.extend(["--r", "-0.01", "--type", "put", "--json"]);
        let out = run_args(&args).unwrap();
        let parsed: Greeks = serde_json::from_str(&out).expect("valid JSON");
        let expected = greeks(100.0, 100.0, 0.5, -0.01, 0.2, OptionKind::Put);
        for (got, want) in [
            (parsed.price, expected.price),
            (parsed.delta, expected.delta),
            (parsed.gamma, expected.gamma),
            (parsed.vega, expected.vega),
            (parsed.theta, expected.theta),
        ] {
            assert!((got - want).abs() < 1e-12, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn test_report_flag_and_degenerate_inputs() {
        let out = run_args(&["-S", "80", "-K", "100", "-T", "0", "--sigma", "0", "--type", "put", "--report"])
            .unwrap();
        assert!(out.contains("Type       : put"));
        assert!(out.contains("Delta      : -1.000000"));
    }

    #[test]
    fn test_non_positive_spot_rejected() {
        let mut args = FULL.to_vec();
        args[1] = "0";
        assert!(matches!(run_args(&args), Err(BsError::InvalidParameters { .. })));
    }

    #[test]
    fn test_smoke_output() {
        let out = run_args(&["--smoke"]).unwrap();
        assert!(out.contains("φ(0)  = 0.39894"));
        assert!(out.contains("N(0)  = 0.50000"));
        assert!(out.contains("N(1)  = 0.84134"));
        assert!(out.contains("d1 ≈ 0.176777"));
        assert!(out.ends_with("Theta/day  : -0.019380\n"));
    }
}
