//! TERM 3: ENERGY
//!
//! Electricity and heating contributions, added to the running total after
//! the stage-1 discount. Neither discount stage touches the electricity or
//! heating figures between steps.

use crate::profile::Energy;

/// Result of the energy term.
#[derive(Debug, Clone, Copy)]
pub struct EnergyTerm {
    /// Monthly electricity contribution, kg CO2e.
    pub electricity_kg: f64,
    /// Monthly heating contribution, kg CO2e.
    pub heating_kg: f64,
}

impl EnergyTerm {
    pub fn subtotal(&self) -> f64 {
        self.electricity_kg + self.heating_kg
    }
}

/// Calculate the energy term.
pub fn calculate_energy(energy: &Energy) -> EnergyTerm {
    EnergyTerm {
        electricity_kg: energy.electricity_kwh_per_month
            * energy.electricity_source.rate_per_kwh(),
        heating_kg: energy.heating_units_per_month * energy.heating_type.rate_per_unit(),
    }
}
