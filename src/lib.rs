//! Carbon Footprint Estimator
//!
//! Maps a four-category lifestyle survey (transportation, food, energy,
//! lifestyle) to a monthly kg CO2e estimate, with per-category display
//! values and recommendation flags for the presentation layer.
//!
//! Structure:
//! - `profile`: typed survey inputs plus the untyped form-payload boundary
//! - `metrics/`: individual per-category emission terms
//! - `estimator`: the weighted-sum pipeline with its two discount stages
//! - `advice/`: recommendation flags and presentation cards
//!
//! The core is a pure function: no I/O, no retained state, safe to call
//! concurrently for independent profiles.

pub mod advice;
pub mod error;
pub mod estimator;
pub mod metrics;
pub mod profile;

// Re-export commonly used types
pub use advice::{advice_cards, recommend, AdviceCard, Recommendation};
pub use error::{EstimateError, Result};
pub use estimator::{estimate, estimate_batch, Breakdown, FootprintResult};
pub use profile::{Profile, RawProfile};
