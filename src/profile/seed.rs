//! Built-in seed profiles
//!
//! The application starts with a filled sample owner so the owner dashboard
//! has something to show before the questionnaire runs. Config may replace
//! either profile.

use serde::{Deserialize, Serialize};

use super::{BuyerProfile, ChargingBehavior, OwnerProfile, UsagePattern};

/// Profiles the initial state (and every logout) starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedProfiles {
    pub owner: OwnerProfile,
    pub buyer: BuyerProfile,
}

impl Default for SeedProfiles {
    fn default() -> Self {
        sample()
    }
}

/// Sample owner with a sample vehicle, and an empty buyer
pub fn sample() -> SeedProfiles {
    SeedProfiles {
        owner: sample_owner(),
        buyer: BuyerProfile::default(),
    }
}

pub fn sample_owner() -> OwnerProfile {
    OwnerProfile {
        email: "sarah.johnson@example.com".to_string(),
        zip_code: "94105".to_string(),
        name: "Sarah Johnson".to_string(),
        age: 34,
        car_make: "Tesla".to_string(),
        car_model: "Model 3".to_string(),
        car_year: 2022,
        mileage: 15_000,
        usage_pattern: UsagePattern::Mixed,
        has_home_charger: true,
        home_charger_type: "Level 2".to_string(),
        charging_behavior: ChargingBehavior::Overnight,
        persona: None,
    }
}

/// Seed with blank profiles, for callers that want no sample data
pub fn empty() -> SeedProfiles {
    SeedProfiles {
        owner: OwnerProfile::default(),
        buyer: BuyerProfile::default(),
    }
}
