// src/output.rs
use crate::analytics::bs_analytic::{Greeks, MarketInputs};
use crate::analytics::sweep::{GreekSet, SweepPoint};
use crate::error::BsResult;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Human-readable report of one valuation: inputs, price and Greeks,
/// with vega also per 1% vol and theta also per day.
pub struct Report<'a> {
    pub inputs: &'a MarketInputs,
    pub greeks: &'a Greeks,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (inputs, g) = (self.inputs, self.greeks);
        writeln!(f, "=== Black–Scholes ===")?;
        writeln!(f, "Type       : {}", inputs.kind)?;
        writeln!(f, "S, K       : {:.6}, {:.6}", inputs.spot, inputs.strike)?;
        writeln!(f, "T (years)  : {:.6}", inputs.t)?;
        writeln!(f, "sigma, r   : {:.6}, {:.6}", inputs.sigma, inputs.r)?;
        writeln!(f, "----------------------------")?;
        writeln!(f, "Price      : {:.6}", g.price)?;
        writeln!(f, "Delta      : {:.6}", g.delta)?;
        writeln!(f, "Gamma      : {:.6}", g.gamma)?;
        writeln!(
            f,
            "Vega       : {:.6}   (per 1.00 vol; per 1% ≈ {:.6})",
            g.vega,
            g.vega_per_pct()
        )?;
        writeln!(f, "Theta (yr) : {:.6}", g.theta)?;
        writeln!(f, "Theta/day  : {:.6}", g.theta_per_day())
    }
}

pub fn write_report<W: Write>(out: &mut W, inputs: &MarketInputs, greeks: &Greeks) -> io::Result<()> {
    write!(out, "{}", Report { inputs, greeks })
}

pub fn format_report(inputs: &MarketInputs, greeks: &Greeks) -> String {
    Report { inputs, greeks }.to_string()
}

/// CSV header and rows for a sweep. Vega is per 1% vol and theta per day.
pub fn write_sweep_csv<W: Write>(
    out: &mut W,
    points: &[SweepPoint],
    columns: GreekSet,
) -> io::Result<()> {
    let selected = selected_columns(columns);

    let mut header = String::from("spot");
    for (name, _) in &selected {
        header.push(',');
        header.push_str(name);
    }
    writeln!(out, "{}", header)?;

    for p in points {
        let mut row = p.spot.to_string();
        for (_, value) in &selected {
            row.push(',');
            row.push_str(&value(&p.greeks).to_string());
        }
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

pub fn write_sweep_csv_file(filename: &str, points: &[SweepPoint], columns: GreekSet) -> BsResult<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_sweep_csv(&mut file, points, columns)?;
    file.flush()?;
    Ok(())
}

type Column = (&'static str, fn(&Greeks) -> f64);

fn selected_columns(columns: GreekSet) -> Vec<Column> {
    let all: [(GreekSet, Column); 5] = [
        (GreekSet::PRICE, ("price", |g| g.price)),
        (GreekSet::DELTA, ("delta", |g| g.delta)),
        (GreekSet::GAMMA, ("gamma", |g| g.gamma)),
        (GreekSet::VEGA, ("vega_pct", |g| g.vega_per_pct())),
        (GreekSet::THETA, ("theta_day", |g| g.theta_per_day())),
    ];
    all.into_iter()
        .filter(|(flag, _)| columns.contains(*flag))
        .map(|(_, col)| col)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::bs_analytic::OptionKind;

    fn demo_inputs() -> MarketInputs {
        MarketInputs::new(100.0, 100.0, 0.5, 0.03, 0.2, OptionKind::Call).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let inputs = demo_inputs();
        let g = inputs.greeks();
        let report = format_report(&inputs, &g);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "=== Black–Scholes ===");
        assert_eq!(lines[1], "Type       : call");
        assert_eq!(lines[2], "S, K       : 100.000000, 100.000000");
        assert_eq!(lines[3], "T (years)  : 0.500000");
        assert_eq!(lines[4], "sigma, r   : 0.200000, 0.030000");
        assert_eq!(lines[6], "Price      : 6.371028");
        assert_eq!(lines[7], "Delta      : 0.570158");
        assert_eq!(lines[8], "Gamma      : 0.027772");
        assert_eq!(lines[9], "Vega       : 27.772132   (per 1.00 vol; per 1% ≈ 0.277721)");
        assert_eq!(lines[10], "Theta (yr) : -7.073770");
        assert_eq!(lines[11], "Theta/day  : -0.019380");
    }

    #[test]
    fn test_write_report_matches_format_report() {
        let inputs = MarketInputs::new(80.0, 100.0, 0.0, 0.03, 0.0, OptionKind::Put).unwrap();
        let g = inputs.greeks();
        let mut buf = Vec::new();
        write_report(&mut buf, &inputs, &g).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format_report(&inputs, &g));
        assert!(format_report(&inputs, &g).ends_with('\n'));
    }

    #[test]
    fn test_sweep_csv_columns() {
        let g = demo_inputs().greeks();
        let points = [
            SweepPoint { spot: 90.0, greeks: g },
            SweepPoint { spot: 110.0, greeks: g },
        ];
        let mut buf = Vec::new();
        write_sweep_csv(&mut buf, &points, GreekSet::DELTA | GreekSet::THETA).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "spot,delta,theta_day");
        let fields: Vec<f64> = lines[1].split(',').map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields, vec![90.0, g.delta, g.theta_per_day()]);
    }
}
