//! Footprint Estimator - Main coordinator for the weighted-sum pipeline
//!
//! Combines the four category terms into the monthly headline total, applies
//! the two discount stages, and derives the per-category display breakdown
//! plus recommendation flags. Includes both single-profile and parallel
//! (Rayon) batch implementations.

use crate::advice::{recommend, Recommendation};
use crate::error::Result;
use crate::metrics::{
    calculate_energy, calculate_food, calculate_lifestyle, calculate_transportation,
};
use crate::profile::Profile;
use rayon::prelude::*;
use serde::Serialize;

/// Per-category display values.
///
/// Computed from the raw undiscounted inputs, not from the discounted running
/// total, so these figures do not sum to `total_kg_co2e`. The car figure is a
/// per-day value while flights are monthly; both quirks are inherited from the
/// source result page and kept as the literal contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    /// Car contribution, kg CO2e per day of driving.
    pub car_kg_per_day: f64,
    /// Flight contribution, kg CO2e per month.
    pub flights_kg_per_month: f64,
    /// Diet base, kg CO2e per month, before the sourcing discount.
    pub diet_kg_per_month: f64,
    /// Food-footprint reduction from local sourcing, percent.
    pub local_food_reduction_pct: f64,
}

/// Footprint estimation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintResult {
    /// Headline monthly total, kg CO2e, rounded to 2 decimals.
    pub total_kg_co2e: f64,
    pub breakdown: Breakdown,
    pub recommendations: Vec<Recommendation>,
}

/// Estimate the monthly carbon footprint for one profile.
///
/// Pure and deterministic: no I/O, no retained state, same input always
/// yields the same output. Fails only on malformed input; never returns a
/// partial result.
///
/// Pipeline order matters: the stage-1 sourcing discount applies to the
/// combined transportation + diet running total, and the stage-2 recycling
/// discount applies to everything accumulated so far including energy and
/// shopping. Both behaviors come from the source formula.
pub fn estimate(profile: &Profile) -> Result<FootprintResult> {
    profile.validate()?;

    let transportation = calculate_transportation(&profile.transportation);
    let food = calculate_food(&profile.food);
    let energy = calculate_energy(&profile.energy);
    let lifestyle = calculate_lifestyle(&profile.lifestyle);

    let mut total = transportation.subtotal + food.diet_base_kg;
    total *= food.sourcing_factor;
    total += energy.subtotal();
    total += lifestyle.shopping_kg;
    total *= lifestyle.recycling_factor;

    // Both discount factors stay within [0.5, 1] for validated input, so the
    // total cannot go negative. Invariant, not a clamp.
    debug_assert!(total >= 0.0, "total went negative: {}", total);

    Ok(FootprintResult {
        total_kg_co2e: round2(total),
        breakdown: Breakdown {
            car_kg_per_day: transportation.car_kg,
            flights_kg_per_month: transportation.flight_kg,
            diet_kg_per_month: food.diet_base_kg,
            local_food_reduction_pct: profile.food.local_food_pct / 2.0,
        },
        recommendations: recommend(profile),
    })
}

/// Estimate many independent profiles in parallel using Rayon.
///
/// Order-preserving; a failed profile yields an `Err` at its position without
/// affecting the others. Safe because `estimate` holds no state between calls.
pub fn estimate_batch(profiles: &[Profile]) -> Vec<Result<FootprintResult>> {
    profiles.par_iter().map(estimate).collect()
}

/// Round to 2 decimal places, half away from zero.
///
/// Matches the source's `Math.round(total * 100) / 100` for the non-negative
/// totals this pipeline produces.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CarType, ElectricitySource, HeatingType, MeatConsumption, ShoppingFrequency, TransitMode};
    use approx::assert_relative_eq;

    #[test]
    fn test_minimal_profile_totals_fifteen() {
        // All-zero magnitudes, lowest-rate categories:
        // diet 5 -> stage 1 x1 -> +0 energy -> +10 shopping -> stage 2 x1 = 15
        let mut p = Profile::default();
        p.transportation.car_type = CarType::Electric;
        p.transportation.car_km_per_day = 0.0;
        p.transportation.transit_mode = TransitMode::Subway;
        p.transportation.transit_km_per_day = 0.0;
        p.transportation.flight_hours_per_month = 0.0;
        p.food.meat_consumption = MeatConsumption::None;
        p.food.local_food_pct = 0.0;
        p.food.organic_food_pct = 0.0;
        p.energy.electricity_source = ElectricitySource::Renewable;
        p.energy.electricity_kwh_per_month = 0.0;
        p.energy.heating_type = HeatingType::Renewable;
        p.energy.heating_units_per_month = 0.0;
        p.lifestyle.shopping_frequency = ShoppingFrequency::Minimal;
        p.lifestyle.waste_recycling_pct = 0.0;

        let result = estimate(&p).unwrap();
        assert_relative_eq!(result.total_kg_co2e, 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_form_defaults_total() {
        // 4.5 + 20 = 24.5; x0.6375 = 15.61875; +90 +30 = 135.61875;
        // +20 = 155.61875; x0.7 = 108.933125 -> 108.93
        let result = estimate(&Profile::default()).unwrap();
        assert_relative_eq!(result.total_kg_co2e, 108.93, epsilon = 1e-9);
    }

    #[test]
    fn test_breakdown_uses_raw_inputs() {
        let result = estimate(&Profile::default()).unwrap();
        assert_relative_eq!(result.breakdown.car_kg_per_day, 4.0, epsilon = 1e-12);
        assert_relative_eq!(result.breakdown.flights_kg_per_month, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.breakdown.diet_kg_per_month, 20.0, epsilon = 1e-12);
        assert_relative_eq!(result.breakdown.local_food_reduction_pct, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(round2(108.933125), 108.93);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(1.004999), 1.0);
    }

    #[test]
    fn test_invalid_profile_is_rejected_before_scoring() {
        let mut p = Profile::default();
        p.food.organic_food_pct = -5.0;
        assert!(estimate(&p).is_err());
    }
}
