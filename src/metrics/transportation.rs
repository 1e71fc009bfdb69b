//! TERM 1: TRANSPORTATION
//!
//! Car and public transport contributions accumulate on a per-day distance
//! basis; flights on a per-month hours basis. The three are summed directly
//! into one subtotal with no unit conversion, matching the source formula.

use crate::profile::Transportation;

/// Average kg CO2e per hour of flight.
pub const FLIGHT_RATE_PER_HOUR: f64 = 200.0;

/// Result of the transportation term.
#[derive(Debug, Clone, Copy)]
pub struct TransportationTerm {
    /// Car contribution, kg CO2e per day of driving.
    pub car_kg: f64,
    /// Public transport contribution, kg CO2e per day of travel.
    pub transit_kg: f64,
    /// Flight contribution, kg CO2e per month.
    pub flight_kg: f64,
    /// Sum of the three contributions.
    pub subtotal: f64,
}

/// Calculate the transportation term.
pub fn calculate_transportation(transportation: &Transportation) -> TransportationTerm {
    let car_kg = transportation.car_km_per_day * transportation.car_type.rate_per_km();
    let transit_kg =
        transportation.transit_km_per_day * transportation.transit_mode.rate_per_km();
    let flight_kg = transportation.flight_hours_per_month * FLIGHT_RATE_PER_HOUR;

    TransportationTerm {
        car_kg,
        transit_kg,
        flight_kg,
        subtotal: car_kg + transit_kg + flight_kg,
    }
}
