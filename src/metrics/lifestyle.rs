//! TERM 4: LIFESTYLE
//!
//! A fixed shopping term by frequency band, plus the stage-2 recycling
//! discount factor applied to the entire running total as the final step.
//! Electronic usage is carried on the profile but has no weight in the
//! current formula.

use crate::profile::Lifestyle;

/// Result of the lifestyle term.
#[derive(Debug, Clone, Copy)]
pub struct LifestyleTerm {
    /// Monthly shopping contribution, kg CO2e.
    pub shopping_kg: f64,
    /// Stage-2 multiplier: 1 - recycling/200, within [0.5, 1].
    pub recycling_factor: f64,
}

/// Calculate the lifestyle term.
pub fn calculate_lifestyle(lifestyle: &Lifestyle) -> LifestyleTerm {
    LifestyleTerm {
        shopping_kg: lifestyle.shopping_frequency.shopping_kg(),
        recycling_factor: 1.0 - lifestyle.waste_recycling_pct / 200.0,
    }
}
