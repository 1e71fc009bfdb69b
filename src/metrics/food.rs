//! TERM 2: FOOD
//!
//! A fixed diet base by meat-consumption band, plus the stage-1 sourcing
//! discount factor. The estimator applies the factor to the whole running
//! total (transportation + diet), not only to the diet base; that is the
//! source formula's behavior and is kept as-is.

use crate::profile::Food;

/// Result of the food term.
#[derive(Debug, Clone, Copy)]
pub struct FoodTerm {
    /// Monthly diet base, kg CO2e, before any discount.
    pub diet_base_kg: f64,
    /// Stage-1 multiplier: (1 - local/200) * (1 - organic/200), within [0.25, 1].
    pub sourcing_factor: f64,
}

/// Calculate the food term.
pub fn calculate_food(food: &Food) -> FoodTerm {
    let local_factor = 1.0 - food.local_food_pct / 200.0;
    let organic_factor = 1.0 - food.organic_food_pct / 200.0;

    FoodTerm {
        diet_base_kg: food.meat_consumption.diet_base_kg(),
        sourcing_factor: local_factor * organic_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::MeatConsumption;
    use approx::assert_relative_eq;

    #[test]
    fn test_diet_base_bands() {
        for (band, expected) in [
            (MeatConsumption::High, 30.0),
            (MeatConsumption::Medium, 20.0),
            (MeatConsumption::Low, 10.0),
            (MeatConsumption::None, 5.0),
        ] {
            let food = Food {
                meat_consumption: band,
                local_food_pct: 0.0,
                organic_food_pct: 0.0,
            };
            assert_relative_eq!(calculate_food(&food).diet_base_kg, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_no_sourcing_gives_unit_factor() {
        let food = Food {
            meat_consumption: MeatConsumption::Medium,
            local_food_pct: 0.0,
            organic_food_pct: 0.0,
        };
        assert_relative_eq!(calculate_food(&food).sourcing_factor, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_full_sourcing_floors_at_quarter() {
        // Each factor bottoms out at 0.5, so the product bottoms out at 0.25
        let food = Food {
            meat_consumption: MeatConsumption::Medium,
            local_food_pct: 100.0,
            organic_food_pct: 100.0,
        };
        assert_relative_eq!(calculate_food(&food).sourcing_factor, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_form_default_factor() {
        // 50% local, 30% organic: 0.75 * 0.85
        assert_relative_eq!(
            calculate_food(&Food::default()).sourcing_factor,
            0.6375,
            epsilon = 1e-12
        );
    }
}
