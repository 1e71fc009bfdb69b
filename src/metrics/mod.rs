//! Per-category emission terms
//!
//! Each survey category is scored in its own module, mirroring the category
//! tabs the form presents. The estimator combines the terms; nothing here
//! applies a discount stage to another category's output.

pub mod energy;
pub mod food;
pub mod lifestyle;
pub mod transportation;

// Re-export term functions
pub use energy::{calculate_energy, EnergyTerm};
pub use food::{calculate_food, FoodTerm};
pub use lifestyle::{calculate_lifestyle, LifestyleTerm};
pub use transportation::{calculate_transportation, TransportationTerm};
