pub mod generator;
pub mod types;

pub use generator::{advice_cards, recommend};
pub use types::{AdviceCard, Recommendation};
