//! Recommendation derivation
//!
//! Threshold predicates over the raw profile, evaluated independently of the
//! scoring pipeline. The emission order below is fixed for deterministic
//! output, but consumers must treat the set as order-insensitive.

use crate::advice::types::{AdviceCard, Recommendation};
use crate::profile::{CarType, ElectricitySource, MeatConsumption, Profile};

/// Daily public-transport distance below which more transit use is suggested.
const LOW_TRANSIT_KM: f64 = 10.0;

/// Recycling percentage below which better recycling habits are suggested.
const LOW_RECYCLING_PCT: f64 = 50.0;

/// Derive recommendation flags for a profile.
pub fn recommend(profile: &Profile) -> Vec<Recommendation> {
    let mut flags = Vec::new();

    if profile.transportation.car_type == CarType::Gasoline {
        flags.push(Recommendation::SwitchVehicle);
    }
    if profile.transportation.transit_km_per_day < LOW_TRANSIT_KM {
        flags.push(Recommendation::UsePublicTransport);
    }
    if profile.food.meat_consumption == MeatConsumption::High {
        flags.push(Recommendation::ReduceMeat);
    }
    if profile.energy.electricity_source != ElectricitySource::Renewable {
        flags.push(Recommendation::SwitchRenewableEnergy);
    }
    if profile.lifestyle.waste_recycling_pct < LOW_RECYCLING_PCT {
        flags.push(Recommendation::IncreaseRecycling);
    }

    flags
}

/// Render presentation cards for a set of flags, preserving their order.
pub fn advice_cards(flags: &[Recommendation]) -> Vec<AdviceCard> {
    flags.iter().map(|flag| flag.card()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{HeatingType, ShoppingFrequency};

    #[test]
    fn test_form_defaults_trigger_three_flags() {
        // Gasoline car, 5 km transit, mixed electricity; 60% recycling and
        // medium meat stay under their thresholds
        let flags = recommend(&Profile::default());
        assert_eq!(
            flags,
            vec![
                Recommendation::SwitchVehicle,
                Recommendation::UsePublicTransport,
                Recommendation::SwitchRenewableEnergy,
            ]
        );
    }

    #[test]
    fn test_green_profile_triggers_none() {
        let mut p = Profile::default();
        p.transportation.car_type = CarType::Electric;
        p.transportation.transit_km_per_day = 15.0;
        p.food.meat_consumption = MeatConsumption::Low;
        p.energy.electricity_source = ElectricitySource::Renewable;
        p.energy.heating_type = HeatingType::Renewable;
        p.lifestyle.shopping_frequency = ShoppingFrequency::Minimal;
        p.lifestyle.waste_recycling_pct = 80.0;

        assert!(recommend(&p).is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut p = Profile::default();
        p.transportation.car_type = CarType::Hybrid;
        p.energy.electricity_source = ElectricitySource::Renewable;

        // Exactly at the boundary: neither flag fires
        p.transportation.transit_km_per_day = 10.0;
        p.lifestyle.waste_recycling_pct = 50.0;
        assert!(recommend(&p).is_empty());

        // Just below: both fire
        p.transportation.transit_km_per_day = 9.9;
        p.lifestyle.waste_recycling_pct = 49.9;
        assert_eq!(
            recommend(&p),
            vec![
                Recommendation::UsePublicTransport,
                Recommendation::IncreaseRecycling,
            ]
        );
    }

    #[test]
    fn test_high_meat_flags_reduce_meat() {
        let mut p = Profile::default();
        p.food.meat_consumption = MeatConsumption::High;
        assert!(recommend(&p).contains(&Recommendation::ReduceMeat));
    }

    #[test]
    fn test_cards_preserve_flag_order() {
        let flags = vec![
            Recommendation::IncreaseRecycling,
            Recommendation::SwitchVehicle,
        ];
        let cards = advice_cards(&flags);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].flag, Recommendation::IncreaseRecycling);
        assert_eq!(cards[1].flag, Recommendation::SwitchVehicle);
    }
}
