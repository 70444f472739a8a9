// ABOUTME: Request payloads for the recommendation, carbon, and future surrogates
// ABOUTME: Lenient decoding substitutes documented defaults for missing or malformed fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::travel::{CommuteMode, DietType};

/// Default commute label when the field is missing
pub const DEFAULT_COMMUTE_MODE: &str = "car";
/// Default one-way daily distance in km
pub const DEFAULT_DISTANCE_KM: f64 = 10.0;
/// Default diet label when the field is missing
pub const DEFAULT_DIET_TYPE: &str = "mixed";
/// Default monthly household energy in kWh
pub const DEFAULT_ENERGY_USAGE_KWH: f64 = 300.0;

/// Reads fields out of a JSON object, falling back to defaults
///
/// Strings must be JSON strings; numbers may be JSON numbers or numeric
/// strings. Negative numbers clamp to zero.
pub struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    /// Wrap a JSON object
    #[must_use]
    pub const fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Read a string field
    #[must_use]
    pub fn string(&self, key: &str, default: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(value)) => value.clone(),
            Some(other) => {
                debug!(field = key, value = %other, "non-string field replaced by default");
                default.to_owned()
            }
            None => default.to_owned(),
        }
    }

    /// Read a non-negative numeric field
    #[must_use]
    pub fn number(&self, key: &str, default: f64) -> f64 {
        let parsed = match self.fields.get(key) {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(value) if value.is_finite() => value.max(0.0),
            Some(_) | None => {
                if self.fields.contains_key(key) {
                    debug!(field = key, "malformed numeric field replaced by default");
                }
                default
            }
        }
    }
}

/// Inputs of the recommendation surrogate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserInput {
    /// How the user commutes
    pub commute_mode: CommuteMode,
    /// One-way daily commute distance in km
    pub distance_km: f64,
    /// What the user mostly eats
    pub diet_type: DietType,
    /// Monthly household electricity in kWh
    #[serde(rename = "energy_usage_kWh")]
    pub energy_usage_kwh: f64,
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            commute_mode: CommuteMode::from_label(DEFAULT_COMMUTE_MODE),
            distance_km: DEFAULT_DISTANCE_KM,
            diet_type: DietType::from_label(DEFAULT_DIET_TYPE),
            energy_usage_kwh: DEFAULT_ENERGY_USAGE_KWH,
        }
    }
}

impl UserInput {
    /// Decode from a JSON object, substituting defaults field by field
    #[must_use]
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let reader = FieldReader::new(fields);
        Self {
            commute_mode: CommuteMode::from_label(
                &reader.string("commute_mode", DEFAULT_COMMUTE_MODE),
            ),
            distance_km: reader.number("distance_km", DEFAULT_DISTANCE_KM),
            diet_type: DietType::from_label(&reader.string("diet_type", DEFAULT_DIET_TYPE)),
            energy_usage_kwh: reader.number("energy_usage_kWh", DEFAULT_ENERGY_USAGE_KWH),
        }
    }
}

/// A request whose categorical and numeric fields are addressed by the
/// column names stored in one-hot metadata
pub trait TabularRecord {
    /// Categorical value for a metadata column, if the record knows it
    fn categorical(&self, column: &str) -> Option<&str>;
    /// Raw numeric value for a metadata column, if the record knows it
    fn numeric(&self, column: &str) -> Option<f64>;
}

/// Inputs of the carbon emission surrogate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifestyleInput {
    /// Body type
    pub body_type: String,
    /// Sex
    pub sex: String,
    /// Diet
    pub diet: String,
    /// Shower frequency
    pub shower: String,
    /// Heating energy source
    pub heating: String,
    /// Main transport
    pub transport: String,
    /// Vehicle fuel
    pub vehicle: String,
    /// Social activity
    pub social: String,
    /// Air travel frequency
    pub flight: String,
    /// Energy-efficient appliances ("Yes"/"No")
    pub energy_eff: String,
    /// Recycling habits
    pub recycling: String,
    /// Cooking energy
    pub cooking: String,
    /// Monthly grocery bill
    pub grocery: f64,
    /// Monthly vehicle distance in km
    pub vehicle_distance: f64,
    /// Waste bags per week
    pub waste_weekly: f64,
    /// Daily TV/PC hours
    pub tv_daily_hour: f64,
    /// New clothes per month
    pub clothes_monthly: f64,
    /// Daily internet hours
    pub internet_daily: f64,
}

impl LifestyleInput {
    /// Decode from a JSON object, substituting defaults field by field
    #[must_use]
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let r = FieldReader::new(fields);
        Self {
            body_type: r.string("body_type", "average"),
            sex: r.string("sex", "male"),
            diet: r.string("diet", "omnivore"),
            shower: r.string("shower", "daily"),
            heating: r.string("heating", "gas"),
            transport: r.string("transport", "car"),
            vehicle: r.string("vehicle", "petrol"),
            social: r.string("social", "medium"),
            flight: r.string("flight", "never"),
            energy_eff: r.string("energy_eff", "No"),
            recycling: r.string("recycling", "None"),
            cooking: r.string("cooking", "gas"),
            grocery: r.number("grocery", 400.0),
            vehicle_distance: r.number("vehicle_distance", 500.0),
            waste_weekly: r.number("waste_weekly", 3.0),
            tv_daily_hour: r.number("tv_daily_hour", 2.0),
            clothes_monthly: r.number("clothes_monthly", 5.0),
            internet_daily: r.number("internet_daily", 4.0),
        }
    }
}

impl Default for LifestyleInput {
    fn default() -> Self {
        Self::from_fields(&Map::new())
    }
}

impl TabularRecord for LifestyleInput {
    fn categorical(&self, column: &str) -> Option<&str> {
        let value = match column {
            "Body Type" => &self.body_type,
            "Sex" => &self.sex,
            "Diet" => &self.diet,
            "Shower" => &self.shower,
            "Heating" => &self.heating,
            "Transport" => &self.transport,
            "Vehicle" => &self.vehicle,
            "Social" => &self.social,
            "Flight" => &self.flight,
            "Energy Eff" => &self.energy_eff,
            "Recycling" => &self.recycling,
            "Cooking" => &self.cooking,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "Grocery" => Some(self.grocery),
            "Vehicle Distance" => Some(self.vehicle_distance),
            "Waste Weekly" => Some(self.waste_weekly),
            "TV Daily Hour" => Some(self.tv_daily_hour),
            "Clothes Monthly" => Some(self.clothes_monthly),
            "Internet Daily" => Some(self.internet_daily),
            _ => None,
        }
    }
}

/// Inputs of the future emission surrogate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FutureInput {
    /// Body type
    pub body_type: String,
    /// Sex
    pub sex: String,
    /// Diet
    pub diet: String,
    /// Shower frequency
    pub shower: String,
    /// Heating energy source
    pub heating: String,
    /// Main transport
    pub transport: String,
    /// Vehicle type
    pub vehicle_type: String,
    /// Social activity
    pub social_activity: String,
    /// Air travel frequency
    pub air_travel_frequency: String,
    /// Waste bag size
    pub waste_bag_size: String,
    /// Energy-efficient appliances ("Yes"/"No")
    pub energy_efficiency: String,
    /// Recycling habits
    pub recycling: String,
    /// Cooking energy
    pub cooking_with: String,
    /// Monthly grocery bill
    pub monthly_grocery_bill: f64,
    /// Monthly vehicle distance in km
    pub vehicle_monthly_distance: f64,
    /// Waste bags per week
    pub waste_bag_weekly_count: f64,
    /// Daily TV/PC hours
    pub tv_pc_daily_hour: f64,
    /// New clothes per month
    pub new_clothes_monthly: f64,
    /// Daily internet hours
    pub internet_daily_hour: f64,
}

impl FutureInput {
    /// Decode from a JSON object, substituting defaults field by field
    #[must_use]
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let r = FieldReader::new(fields);
        Self {
            body_type: r.string("body_type", "average"),
            sex: r.string("sex", "male"),
            diet: r.string("diet", "omnivore"),
            shower: r.string("shower", "daily"),
            heating: r.string("heating", "gas"),
            transport: r.string("transport", "car"),
            vehicle_type: r.string("vehicle_type", "petrol"),
            social_activity: r.string("social_activity", "medium"),
            air_travel_frequency: r.string("air_travel_frequency", "never"),
            waste_bag_size: r.string("waste_bag_size", "medium"),
            energy_efficiency: r.string("energy_efficiency", "No"),
            recycling: r.string("recycling", "None"),
            cooking_with: r.string("cooking_with", "gas"),
            monthly_grocery_bill: r.number("monthly_grocery_bill", 400.0),
            vehicle_monthly_distance: r.number("vehicle_monthly_distance", 500.0),
            waste_bag_weekly_count: r.number("waste_bag_weekly_count", 3.0),
            tv_pc_daily_hour: r.number("tv_pc_daily_hour", 2.0),
            new_clothes_monthly: r.number("new_clothes_monthly", 5.0),
            internet_daily_hour: r.number("internet_daily_hour", 4.0),
        }
    }
}

impl Default for FutureInput {
    fn default() -> Self {
        Self::from_fields(&Map::new())
    }
}

impl TabularRecord for FutureInput {
    fn categorical(&self, column: &str) -> Option<&str> {
        let value = match column {
            "Body Type" => &self.body_type,
            "Sex" => &self.sex,
            "Diet" => &self.diet,
            "How Often Shower" => &self.shower,
            "Heating Energy Source" => &self.heating,
            "Transport" => &self.transport,
            "Vehicle Type" => &self.vehicle_type,
            "Social Activity" => &self.social_activity,
            "Frequency of Traveling by Air" => &self.air_travel_frequency,
            "Waste Bag Size" => &self.waste_bag_size,
            "Energy efficiency" => &self.energy_efficiency,
            "Recycling" => &self.recycling,
            "Cooking_With" => &self.cooking_with,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "Monthly Grocery Bill" => Some(self.monthly_grocery_bill),
            "Vehicle Monthly Distance Km" => Some(self.vehicle_monthly_distance),
            "Waste Bag Weekly Count" => Some(self.waste_bag_weekly_count),
            "How Long TV PC Daily Hour" => Some(self.tv_pc_daily_hour),
            "How Many New Clothes Monthly" => Some(self.new_clothes_monthly),
            "How Long Internet Daily Hour" => Some(self.internet_daily_hour),
            _ => None,
        }
    }
}
