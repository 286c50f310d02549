//! Core profile models
//!
//! This module defines the owner-track and buyer-track user records, the
//! enumerated answers collected by the questionnaire forms, and the partial
//! update records used while a multi-page form is in progress.

use serde::{Deserialize, Serialize};

use crate::profile::persona;

/// Implements `as_str`, `Display` and `FromStr` for a fieldless enum using the
/// same kebab-case names serde uses on the wire.
macro_rules! wire_names {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err($crate::Error::invalid_value(format!(
                        "unknown {} '{}' (expected one of: {})",
                        stringify!($ty),
                        other,
                        [$($name),+].join(", ")
                    ))),
                }
            }
        }
    };
}

pub(crate) use wire_names;

/// How the owner mostly drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum UsagePattern {
    CityDriving,
    Commuting,
    #[default]
    Mixed,
    LongDistance,
}

wire_names!(UsagePattern {
    CityDriving => "city-driving",
    Commuting => "commuting",
    Mixed => "mixed",
    LongDistance => "long-distance",
});

/// How the owner usually charges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ChargingBehavior {
    #[default]
    Overnight,
    HomeSlow,
    Public,
    Fast,
}

wire_names!(ChargingBehavior {
    Overnight => "overnight",
    HomeSlow => "home-slow",
    Public => "public",
    Fast => "fast",
});

/// Derived driving-style classification, picks the dashboard variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    Carefree,
    Performance,
}

wire_names!(Persona {
    Carefree => "carefree",
    Performance => "performance",
});

/// Buyer's stated interest in switching to an EV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EvInterest {
    VeryInterested,
    SomewhatInterested,
    JustExploring,
    #[default]
    NotSure,
}

wire_names!(EvInterest {
    VeryInterested => "very-interested",
    SomewhatInterested => "somewhat-interested",
    JustExploring => "just-exploring",
    NotSure => "not-sure",
});

/// What the buyer drives today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CurrentVehicle {
    Gasoline,
    Hybrid,
    PlugInHybrid,
    Electric,
    #[default]
    None,
}

wire_names!(CurrentVehicle {
    Gasoline => "gasoline",
    Hybrid => "hybrid",
    PlugInHybrid => "plug-in-hybrid",
    Electric => "electric",
    None => "none",
});

/// Owner-track user data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub email: String,
    pub zip_code: String,
    pub name: String,
    pub age: u32,
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
    pub mileage: u32,
    pub usage_pattern: UsagePattern,
    pub has_home_charger: bool,
    pub home_charger_type: String,

    pub charging_behavior: ChargingBehavior,

    /// Set by onboarding only; absent until the questionnaire is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,
}

impl OwnerProfile {
    /// Persona implied by the current usage and charging answers.
    ///
    /// Unlike `persona`, this never goes stale after a partial update.
    pub fn derived_persona(&self) -> Persona {
        persona::classify(self.usage_pattern, self.charging_behavior)
    }

    /// Vehicle summary, e.g. "2022 Tesla Model 3"
    pub fn vehicle_label(&self) -> String {
        format!("{} {} {}", self.car_year, self.car_make, self.car_model)
    }
}

/// Buyer-track user data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuyerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub zip_code: String,
    pub country: String,
    /// Age bucket as picked in the form, e.g. "25-34"
    pub age: String,
    #[serde(rename = "interestedInEV")]
    pub interested_in_ev: EvInterest,
    pub current_vehicle: CurrentVehicle,
}

impl BuyerProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Field values collected so far by the owner questionnaire.
///
/// Only `Some` fields are written by [`OwnerProfileUpdate::apply_to`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_pattern: Option<UsagePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_home_charger: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_charger_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging_behavior: Option<ChargingBehavior>,
}

impl OwnerProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge the present fields into `profile`
    pub fn apply_to(&self, profile: &mut OwnerProfile) {
        merge(&mut profile.email, &self.email);
        merge(&mut profile.zip_code, &self.zip_code);
        merge(&mut profile.name, &self.name);
        merge(&mut profile.age, &self.age);
        merge(&mut profile.car_make, &self.car_make);
        merge(&mut profile.car_model, &self.car_model);
        merge(&mut profile.car_year, &self.car_year);
        merge(&mut profile.mileage, &self.mileage);
        merge(&mut profile.usage_pattern, &self.usage_pattern);
        merge(&mut profile.has_home_charger, &self.has_home_charger);
        merge(&mut profile.home_charger_type, &self.home_charger_type);
        merge(&mut profile.charging_behavior, &self.charging_behavior);
    }
}

/// Field values collected so far by the buyer registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuyerProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(rename = "interestedInEV", skip_serializing_if = "Option::is_none")]
    pub interested_in_ev: Option<EvInterest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_vehicle: Option<CurrentVehicle>,
}

impl BuyerProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge the present fields into `profile`
    pub fn apply_to(&self, profile: &mut BuyerProfile) {
        merge(&mut profile.first_name, &self.first_name);
        merge(&mut profile.last_name, &self.last_name);
        merge(&mut profile.email, &self.email);
        merge(&mut profile.zip_code, &self.zip_code);
        merge(&mut profile.country, &self.country);
        merge(&mut profile.age, &self.age);
        merge(&mut profile.interested_in_ev, &self.interested_in_ev);
        merge(&mut profile.current_vehicle, &self.current_vehicle);
    }
}

fn merge<T: Clone>(field: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *field = value.clone();
    }
}
