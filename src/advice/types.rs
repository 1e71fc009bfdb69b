//! Recommendation flags and presentation cards.

use serde::{Deserialize, Serialize};

/// Recommendation flag derived from the raw survey answers.
///
/// Flags are independent boolean predicates; each is either present or absent
/// on a result with no priority or dedup logic. Wire values use the
/// SCREAMING_SNAKE_CASE tags the presentation layer keys its cards by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    SwitchVehicle,
    UsePublicTransport,
    ReduceMeat,
    SwitchRenewableEnergy,
    IncreaseRecycling,
}

/// Presentation card for a recommendation flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceCard {
    pub flag: Recommendation,
    pub title: String,
    pub message: String,
}

impl Recommendation {
    /// Build the presentation card for this flag.
    ///
    /// Card copy matches the original result page.
    pub fn card(self) -> AdviceCard {
        let (title, message) = match self {
            Recommendation::SwitchVehicle => (
                "Consider a hybrid or electric vehicle",
                "Switching to an electric vehicle could reduce your transportation \
                 emissions by up to 75%.",
            ),
            Recommendation::UsePublicTransport => (
                "Increase public transportation usage",
                "Using public transportation more frequently can significantly reduce \
                 your carbon footprint.",
            ),
            Recommendation::ReduceMeat => (
                "Try meatless Mondays",
                "Reducing meat consumption by even one day per week can lower your \
                 food-related emissions by up to 15%.",
            ),
            Recommendation::SwitchRenewableEnergy => (
                "Switch to renewable energy",
                "Changing to a renewable energy provider could reduce your electricity \
                 emissions by up to 80%.",
            ),
            Recommendation::IncreaseRecycling => (
                "Increase recycling",
                "Improving your recycling habits can reduce your waste-related \
                 emissions and help conserve resources.",
            ),
        };

        AdviceCard {
            flag: self,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wire_tags() {
        let json = serde_json::to_string(&Recommendation::SwitchVehicle).unwrap();
        assert_eq!(json, r#""SWITCH_VEHICLE""#);
        let parsed: Recommendation = serde_json::from_str(r#""INCREASE_RECYCLING""#).unwrap();
        assert_eq!(parsed, Recommendation::IncreaseRecycling);
    }

    #[test]
    fn test_card_is_keyed_by_flag() {
        let card = Recommendation::ReduceMeat.card();
        assert_eq!(card.flag, Recommendation::ReduceMeat);
        assert_eq!(card.title, "Try meatless Mondays");
        assert!(card.message.contains("one day per week"));
    }
}
