// demos/error_handling_demo.rs
use bs_greeks::analytics::sweep::{sweep_greeks_vs_spot, SweepConfig};
use bs_greeks::{greeks, BsError, MarketInputs, OptionKind};

fn main() {
    println!("Error Handling Demo for bs-greeks");
    println!("=================================\n");

    // Test 1: Unknown option kind
    println!("1. Testing unknown option kind...");

    match "straddle".parse::<OptionKind>() {
        Ok(kind) => println!("   Unexpected: parsed as {}", kind),
        Err(e @ BsError::InvalidArgument(_)) => println!("   ✓ Caught error: {}", e),
        Err(e) => println!("   Unexpected error kind: {}", e),
    }

    // Test 2: Negative spot
    println!("\n2. Testing negative spot price...");

    match MarketInputs::new(-100.0, 100.0, 0.5, 0.03, 0.2, OptionKind::Call) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: NaN volatility
    println!("\n3. Testing NaN volatility...");

    match MarketInputs::new(100.0, 100.0, 0.5, 0.03, f64::NAN, OptionKind::Put) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Expired option and zero volatility are floored, not rejected
    println!("\n4. Testing degenerate but accepted inputs...");

    match MarketInputs::new(100.0, 95.0, 0.0, 0.03, 0.0, OptionKind::Call) {
        Ok(inputs) => {
            let g = inputs.greeks();
            println!("   ✓ Accepted (degenerate = {})", inputs.is_degenerate());
            println!("     price = {:.6}, delta = {:.6}, gamma = {:.6}", g.price, g.delta, g.gamma);
        }
        Err(e) => println!("   Error: {}", e),
    }

    // Test 5: The unchecked path lets non-positive strikes through
    println!("\n5. Testing unchecked path with zero strike...");

    let g = greeks(100.0, 0.0, 0.5, 0.03, 0.2, OptionKind::Call);
    println!("   price = {}, delta = {} (caller must guarantee K > 0)", g.price, g.delta);

    // Test 6: Invalid sweep configuration
    println!("\n6. Testing invalid sweep configuration...");

    let bad_sweep = SweepConfig {
        points: 0,
        ..Default::default()
    };
    match sweep_greeks_vs_spot(&bad_sweep) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\n=================================");
    println!("Error handling demo completed!");
}
