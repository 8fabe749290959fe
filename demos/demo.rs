// demos/demo.rs
use bs_greeks::analytics::sweep::{sweep_greeks_vs_spot, GreekSet, SweepConfig};
use bs_greeks::output::{format_report, write_sweep_csv_file};
use bs_greeks::{price, MarketInputs, OptionKind};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 && args[1] == "--csv" {
        run_sweep_to_csv(&args[2]);
    } else {
        run_demo_mode();
    }
}

fn run_sweep_to_csv(filename: &str) {
    let cfg = SweepConfig {
        columns: GreekSet::all(),
        ..Default::default()
    };
    let points = sweep_greeks_vs_spot(&cfg).expect("Valid sweep configuration");
    write_sweep_csv_file(filename, &points, cfg.columns).expect("Could not write CSV");
    println!("Greeks vs spot written to {}", filename);
}

fn run_demo_mode() {
    println!("Running bs-greeks Demo\n");

    let s0 = 100.0;
    let k = 100.0;
    let t = 0.5;
    let r = 0.03;
    let sigma = 0.2;

    for kind in [OptionKind::Call, OptionKind::Put] {
        let inputs = MarketInputs::new(s0, k, t, r, sigma, kind).expect("Valid inputs");
        println!("{}", format_report(&inputs, &inputs.greeks()));
    }

    println!("--- Put-call parity ---");
    let call = price(s0, k, t, r, sigma, OptionKind::Call);
    let put = price(s0, k, t, r, sigma, OptionKind::Put);
    let forward = s0 - k * (-r * t).exp();
    println!("C - P          : {:.10}", call - put);
    println!("S - K e^(-rT)  : {:.10}", forward);
    println!("Difference     : {:.2e}\n", (call - put - forward).abs());

    println!("--- Call Greeks vs spot (vega per 1%, theta per day) ---");
    let cfg = SweepConfig {
        s_min: 70.0,
        s_max: 130.0,
        points: 7,
        ..Default::default()
    };
    let points = sweep_greeks_vs_spot(&cfg).expect("Valid sweep configuration");
    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>10}",
        "spot", "delta", "gamma", "vega%", "theta/d"
    );
    for p in &points {
        println!(
            "{:>8.2} {:>10.6} {:>10.6} {:>10.6} {:>10.6}",
            p.spot,
            p.greeks.delta,
            p.greeks.gamma,
            p.greeks.vega_per_pct(),
            p.greeks.theta_per_day()
        );
    }
}
