//! State representation

use serde::{Deserialize, Serialize};

use crate::profile::models::wire_names;
use crate::profile::{BuyerProfile, OwnerProfile, SeedProfiles};

/// Top-level track chosen at the start of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    None,
    Owner,
    Buyer,
}

wire_names!(Platform {
    None => "none",
    Owner => "owner",
    Buyer => "buyer",
});

/// Full-screen component currently rendered
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum View {
    #[default]
    PlatformSelection,
    Login,
    BuyerRegistration,
    BuyerPlatformChoice,
    Questionnaire,
    Dashboard,
    Wizard,
    VehicleBrowser,
    Recommendations,
}

wire_names!(View {
    PlatformSelection => "platformSelection",
    Login => "login",
    BuyerRegistration => "buyerRegistration",
    BuyerPlatformChoice => "buyerPlatformChoice",
    Questionnaire => "questionnaire",
    Dashboard => "dashboard",
    Wizard => "wizard",
    VehicleBrowser => "vehicleBrowser",
    Recommendations => "recommendations",
});

impl View {
    /// Track a view belongs to; `None` for the platform picker
    pub fn platform(&self) -> Platform {
        match self {
            View::PlatformSelection => Platform::None,
            View::Login | View::Questionnaire | View::Dashboard => Platform::Owner,
            View::BuyerRegistration
            | View::BuyerPlatformChoice
            | View::Wizard
            | View::VehicleBrowser
            | View::Recommendations => Platform::Buyer,
        }
    }

    /// Screens where in-screen navigation takes over and the global view stays put
    pub fn is_steady_state(&self) -> bool {
        matches!(
            self,
            View::Dashboard | View::VehicleBrowser | View::Recommendations
        )
    }
}

/// Option picked on the buyer platform choice screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyerPath {
    Wizard,
    Database,
}

wire_names!(BuyerPath {
    Wizard => "wizard",
    Database => "database",
});

/// The single application state record.
///
/// Created once from the seed profiles, mutated only through transitions and
/// replaced wholesale on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    pub is_logged_in: bool,
    pub has_completed_onboarding: bool,
    pub has_selected_platform: bool,
    pub platform_type: Platform,
    pub current_view: View,
    pub owner_profile: OwnerProfile,
    pub buyer_profile: BuyerProfile,
    pub wizard_completed: bool,
}

/// Profile selected by the platform type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveProfile<'a> {
    Owner(&'a OwnerProfile),
    Buyer(&'a BuyerProfile),
    None,
}

impl ApplicationState {
    pub fn initial(seed: &SeedProfiles) -> Self {
        Self {
            is_logged_in: false,
            has_completed_onboarding: false,
            has_selected_platform: false,
            platform_type: Platform::None,
            current_view: View::PlatformSelection,
            owner_profile: seed.owner.clone(),
            buyer_profile: seed.buyer.clone(),
            wizard_completed: false,
        }
    }

    pub fn active_profile(&self) -> ActiveProfile<'_> {
        match self.platform_type {
            Platform::Owner => ActiveProfile::Owner(&self.owner_profile),
            Platform::Buyer => ActiveProfile::Buyer(&self.buyer_profile),
            Platform::None => ActiveProfile::None,
        }
    }

    /// Get a short display string
    pub fn display_short(&self) -> String {
        let session = if self.is_logged_in {
            "signed in"
        } else {
            "signed out"
        };
        format!(
            "{} [{}] ({})",
            self.current_view, self.platform_type, session
        )
    }
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self::initial(&SeedProfiles::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ApplicationState::default();
        assert!(!state.is_logged_in);
        assert!(!state.has_selected_platform);
        assert!(!state.has_completed_onboarding);
        assert_eq!(state.platform_type, Platform::None);
        assert_eq!(state.current_view, View::PlatformSelection);
        assert!(!state.wizard_completed);
        assert_eq!(state.active_profile(), ActiveProfile::None);
    }

    #[test]
    fn test_state_json_shape() {
        let json = serde_json::to_value(ApplicationState::default()).unwrap();
        assert_eq!(json["currentView"], "platformSelection");
        assert_eq!(json["platformType"], "none");
        assert_eq!(json["isLoggedIn"], false);
        assert_eq!(json["ownerProfile"]["carMake"], "Tesla");
    }

    #[test]
    fn test_view_tracks() {
        assert_eq!(View::Dashboard.platform(), Platform::Owner);
        assert_eq!(View::Wizard.platform(), Platform::Buyer);
        assert_eq!(View::PlatformSelection.platform(), Platform::None);
        assert_eq!(View::ALL.len(), 9);
        assert_eq!(View::ALL.iter().filter(|v| v.is_steady_state()).count(), 3);
    }

    #[test]
    fn test_view_parse() {
        assert_eq!(
            "buyerPlatformChoice".parse::<View>().unwrap(),
            View::BuyerPlatformChoice
        );
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_active_profile_follows_platform() {
        let mut state = ApplicationState::default();
        state.platform_type = Platform::Buyer;
        assert!(matches!(state.active_profile(), ActiveProfile::Buyer(_)));

        state.platform_type = Platform::Owner;
        match state.active_profile() {
            ActiveProfile::Owner(profile) => assert_eq!(profile.name, "Sarah Johnson"),
            other => panic!("expected owner profile, got {:?}", other),
        }
    }
}
