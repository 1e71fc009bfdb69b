//! Estimate a footprint from a JSON form payload.
//!
//! Reads a `RawProfile` JSON document from the path given as the first
//! argument (or stdin when absent), validates it, and prints the estimate
//! with breakdown and advice cards. Pass `--json` to emit the result as JSON
//! for a downstream presentation layer.

use anyhow::{Context, Result};
use footprint_estimator::{advice_cards, estimate, RawProfile};
use std::io::Read;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let path = args.iter().find(|a| !a.starts_with("--"));

    let payload = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read profile from stdin")?;
            buf
        }
    };

    let raw: RawProfile =
        serde_json::from_str(&payload).context("Failed to parse profile JSON")?;
    let profile = raw.into_profile().context("Invalid profile")?;
    let result = estimate(&profile).context("Estimation failed")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Your Carbon Footprint Results");
    println!("{}", "=".repeat(50));
    println!("Total: {} kg CO2e per month", result.total_kg_co2e);
    println!();
    println!("Transportation Impact");
    println!(
        "  Car usage:       {:.1} kg CO2e per day",
        result.breakdown.car_kg_per_day
    );
    println!(
        "  Monthly flights: {:.1} kg CO2e",
        result.breakdown.flights_kg_per_month
    );
    println!();
    println!("Food Impact");
    println!(
        "  Diet:            {:.1} kg CO2e per month",
        result.breakdown.diet_kg_per_month
    );
    println!(
        "  Local sourcing reduces your food footprint by about {:.1}%",
        result.breakdown.local_food_reduction_pct
    );

    let cards = advice_cards(&result.recommendations);
    if !cards.is_empty() {
        println!();
        println!("Recommended Green Alternatives");
        for card in &cards {
            println!("  * {}", card.title);
            println!("    {}", card.message);
        }
    }

    Ok(())
}
