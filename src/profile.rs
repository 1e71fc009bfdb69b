//! Survey input model
//!
//! One record per survey category plus the assembled `Profile`. Categorical
//! fields are closed enums, so an out-of-set category is unrepresentable in
//! typed code; `RawProfile` is the runtime validation path for data arriving
//! from untyped boundaries (deserialized form payloads).
//!
//! Emission rates live on the enums themselves so every factor table sits next
//! to the type it describes.

use crate::error::{EstimateError, Result};
use serde::{Deserialize, Serialize};

/// Car drivetrain category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarType {
    Gasoline,
    Hybrid,
    Electric,
}

impl CarType {
    /// kg CO2e per km driven.
    pub fn rate_per_km(self) -> f64 {
        match self {
            CarType::Gasoline => 0.20,
            CarType::Hybrid => 0.10,
            CarType::Electric => 0.05,
        }
    }

    fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "gasoline" => Some(CarType::Gasoline),
            "hybrid" => Some(CarType::Hybrid),
            "electric" => Some(CarType::Electric),
            _ => None,
        }
    }
}

/// Public transport category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitMode {
    Bus,
    Train,
    Subway,
}

impl TransitMode {
    /// kg CO2e per km travelled.
    pub fn rate_per_km(self) -> f64 {
        match self {
            TransitMode::Bus => 0.10,
            TransitMode::Train => 0.05,
            TransitMode::Subway => 0.03,
        }
    }

    fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "bus" => Some(TransitMode::Bus),
            "train" => Some(TransitMode::Train),
            "subway" => Some(TransitMode::Subway),
            _ => None,
        }
    }
}

/// Meat consumption band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatConsumption {
    High,
    Medium,
    Low,
    None,
}

impl MeatConsumption {
    /// Monthly diet base term, kg CO2e.
    pub fn diet_base_kg(self) -> f64 {
        match self {
            MeatConsumption::High => 30.0,
            MeatConsumption::Medium => 20.0,
            MeatConsumption::Low => 10.0,
            MeatConsumption::None => 5.0,
        }
    }

    fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "high" => Some(MeatConsumption::High),
            "medium" => Some(MeatConsumption::Medium),
            "low" => Some(MeatConsumption::Low),
            "none" => Some(MeatConsumption::None),
            _ => None,
        }
    }
}

/// Household electricity mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectricitySource {
    Fossil,
    Mixed,
    Renewable,
}

impl ElectricitySource {
    /// kg CO2e per kWh.
    pub fn rate_per_kwh(self) -> f64 {
        match self {
            ElectricitySource::Fossil => 0.5,
            ElectricitySource::Mixed => 0.3,
            ElectricitySource::Renewable => 0.1,
        }
    }

    fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "fossil" => Some(ElectricitySource::Fossil),
            "mixed" => Some(ElectricitySource::Mixed),
            "renewable" => Some(ElectricitySource::Renewable),
            _ => None,
        }
    }
}

/// Home heating fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingType {
    NaturalGas,
    Oil,
    Electric,
    Renewable,
}

impl HeatingType {
    /// kg CO2e per heating unit.
    pub fn rate_per_unit(self) -> f64 {
        match self {
            HeatingType::NaturalGas => 0.2,
            HeatingType::Oil => 0.3,
            HeatingType::Electric => 0.15,
            HeatingType::Renewable => 0.05,
        }
    }

    fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "natural_gas" => Some(HeatingType::NaturalGas),
            "oil" => Some(HeatingType::Oil),
            "electric" => Some(HeatingType::Electric),
            "renewable" => Some(HeatingType::Renewable),
            _ => None,
        }
    }
}

/// Non-essential shopping frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingFrequency {
    Frequent,
    Moderate,
    Minimal,
}

impl ShoppingFrequency {
    /// Monthly shopping term, kg CO2e.
    pub fn shopping_kg(self) -> f64 {
        match self {
            ShoppingFrequency::Frequent => 30.0,
            ShoppingFrequency::Moderate => 20.0,
            ShoppingFrequency::Minimal => 10.0,
        }
    }

    fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "frequent" => Some(ShoppingFrequency::Frequent),
            "moderate" => Some(ShoppingFrequency::Moderate),
            "minimal" => Some(ShoppingFrequency::Minimal),
            _ => None,
        }
    }
}

/// Electronic device usage band.
///
/// Not scored by the current formula; carried for recommendation text and
/// future extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectronicUsage {
    High,
    Moderate,
    Low,
}

impl ElectronicUsage {
    fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "high" => Some(ElectronicUsage::High),
            "moderate" => Some(ElectronicUsage::Moderate),
            "low" => Some(ElectronicUsage::Low),
            _ => None,
        }
    }
}

/// Transportation survey answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transportation {
    pub car_type: CarType,
    /// Average daily car travel, km.
    pub car_km_per_day: f64,
    pub transit_mode: TransitMode,
    /// Average daily public transport travel, km.
    pub transit_km_per_day: f64,
    pub flight_hours_per_month: f64,
}

impl Default for Transportation {
    fn default() -> Self {
        Self {
            car_type: CarType::Gasoline,
            car_km_per_day: 20.0,
            transit_mode: TransitMode::Bus,
            transit_km_per_day: 5.0,
            flight_hours_per_month: 0.0,
        }
    }
}

/// Food survey answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub meat_consumption: MeatConsumption,
    /// Locally sourced share of diet, percent.
    pub local_food_pct: f64,
    /// Organic/sustainable share of diet, percent.
    pub organic_food_pct: f64,
}

impl Default for Food {
    fn default() -> Self {
        Self {
            meat_consumption: MeatConsumption::Medium,
            local_food_pct: 50.0,
            organic_food_pct: 30.0,
        }
    }
}

/// Energy survey answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    pub electricity_source: ElectricitySource,
    /// Monthly electricity usage, kWh.
    pub electricity_kwh_per_month: f64,
    pub heating_type: HeatingType,
    /// Monthly heating usage, units.
    pub heating_units_per_month: f64,
}

impl Default for Energy {
    fn default() -> Self {
        Self {
            electricity_source: ElectricitySource::Mixed,
            electricity_kwh_per_month: 300.0,
            heating_type: HeatingType::NaturalGas,
            heating_units_per_month: 150.0,
        }
    }
}

/// Lifestyle survey answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    pub shopping_frequency: ShoppingFrequency,
    pub electronic_usage: ElectronicUsage,
    /// Recycled share of household waste, percent.
    pub waste_recycling_pct: f64,
}

impl Default for Lifestyle {
    fn default() -> Self {
        Self {
            shopping_frequency: ShoppingFrequency::Moderate,
            electronic_usage: ElectronicUsage::Moderate,
            waste_recycling_pct: 60.0,
        }
    }
}

/// Fully assembled survey record for one estimation call.
///
/// Immutable value record; the estimator holds no state between calls. The
/// surrounding form UI owns mutable state and assembles this at submission.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub transportation: Transportation,
    pub food: Food,
    pub energy: Energy,
    pub lifestyle: Lifestyle,
}

impl Profile {
    /// Check all numeric fields against their declared ranges.
    ///
    /// Magnitudes must be >= 0, percentages within [0, 100]. NaN fails the
    /// corresponding check. No clamping: a caller that wants clamping applies
    /// it before building the profile.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("car_km_per_day", self.transportation.car_km_per_day)?;
        check_non_negative("transit_km_per_day", self.transportation.transit_km_per_day)?;
        check_non_negative(
            "flight_hours_per_month",
            self.transportation.flight_hours_per_month,
        )?;
        check_percent("local_food_pct", self.food.local_food_pct)?;
        check_percent("organic_food_pct", self.food.organic_food_pct)?;
        check_non_negative(
            "electricity_kwh_per_month",
            self.energy.electricity_kwh_per_month,
        )?;
        check_non_negative("heating_units_per_month", self.energy.heating_units_per_month)?;
        check_percent("waste_recycling_pct", self.lifestyle.waste_recycling_pct)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(EstimateError::NegativeValue { field, value });
    }
    Ok(())
}

fn check_percent(field: &'static str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(EstimateError::OutOfRange { field, value });
    }
    Ok(())
}

fn parse_category<T>(
    field: &'static str,
    value: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T> {
    parse(value).ok_or_else(|| EstimateError::InvalidCategory {
        field,
        value: value.to_string(),
    })
}

/// Untyped form payload as submitted by the UI layer.
///
/// Category fields arrive as strings and are checked against their closed
/// sets during conversion; unknown values fail with the offending field and
/// value rather than defaulting.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub car_type: String,
    pub car_km_per_day: f64,
    pub transit_mode: String,
    pub transit_km_per_day: f64,
    pub flight_hours_per_month: f64,
    pub meat_consumption: String,
    pub local_food_pct: f64,
    pub organic_food_pct: f64,
    pub electricity_source: String,
    pub electricity_kwh_per_month: f64,
    pub heating_type: String,
    pub heating_units_per_month: f64,
    pub shopping_frequency: String,
    pub electronic_usage: String,
    pub waste_recycling_pct: f64,
}

impl RawProfile {
    /// Validate every field and assemble the typed record.
    pub fn into_profile(self) -> Result<Profile> {
        let profile = Profile {
            transportation: Transportation {
                car_type: parse_category("car_type", &self.car_type, CarType::from_form_value)?,
                car_km_per_day: self.car_km_per_day,
                transit_mode: parse_category(
                    "transit_mode",
                    &self.transit_mode,
                    TransitMode::from_form_value,
                )?,
                transit_km_per_day: self.transit_km_per_day,
                flight_hours_per_month: self.flight_hours_per_month,
            },
            food: Food {
                meat_consumption: parse_category(
                    "meat_consumption",
                    &self.meat_consumption,
                    MeatConsumption::from_form_value,
                )?,
                local_food_pct: self.local_food_pct,
                organic_food_pct: self.organic_food_pct,
            },
            energy: Energy {
                electricity_source: parse_category(
                    "electricity_source",
                    &self.electricity_source,
                    ElectricitySource::from_form_value,
                )?,
                electricity_kwh_per_month: self.electricity_kwh_per_month,
                heating_type: parse_category(
                    "heating_type",
                    &self.heating_type,
                    HeatingType::from_form_value,
                )?,
                heating_units_per_month: self.heating_units_per_month,
            },
            lifestyle: Lifestyle {
                shopping_frequency: parse_category(
                    "shopping_frequency",
                    &self.shopping_frequency,
                    ShoppingFrequency::from_form_value,
                )?,
                electronic_usage: parse_category(
                    "electronic_usage",
                    &self.electronic_usage,
                    ElectronicUsage::from_form_value,
                )?,
                waste_recycling_pct: self.waste_recycling_pct,
            },
        };

        profile.validate()?;
        Ok(profile)
    }
}
