//! Transition representation
//!
//! Every mutation of [`ApplicationState`] is one of the [`Transition`] values
//! below, applied by the pure [`apply`] function.

use serde::{Deserialize, Serialize};

use crate::profile::models::wire_names;
use crate::profile::{
    BuyerProfile, BuyerProfileUpdate, OwnerProfile, OwnerProfileUpdate, SeedProfiles,
};
use crate::state_machine::{ApplicationState, BuyerPath, Platform, View};

/// A transition request emitted by the view layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Transition {
    SelectPlatform {
        platform: Platform,
    },
    Login {
        email: String,
        #[serde(default, rename = "isNewUser")]
        is_new_user: bool,
    },
    CompleteOnboarding {
        profile: OwnerProfile,
    },
    CompleteBuyerRegistration {
        profile: BuyerProfile,
    },
    SelectBuyerPath {
        path: BuyerPath,
    },
    CompleteWizard,
    UpdateOwnerProfile {
        #[serde(default)]
        changes: OwnerProfileUpdate,
    },
    UpdateBuyerProfile {
        #[serde(default)]
        changes: BuyerProfileUpdate,
    },
    Logout,
}

/// Name of a transition, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    SelectPlatform,
    Login,
    CompleteOnboarding,
    CompleteBuyerRegistration,
    SelectBuyerPath,
    CompleteWizard,
    UpdateOwnerProfile,
    UpdateBuyerProfile,
    Logout,
}

wire_names!(TransitionKind {
    SelectPlatform => "select-platform",
    Login => "login",
    CompleteOnboarding => "complete-onboarding",
    CompleteBuyerRegistration => "complete-buyer-registration",
    SelectBuyerPath => "select-buyer-path",
    CompleteWizard => "complete-wizard",
    UpdateOwnerProfile => "update-owner-profile",
    UpdateBuyerProfile => "update-buyer-profile",
    Logout => "logout",
});

impl Transition {
    pub fn kind(&self) -> TransitionKind {
        match self {
            Transition::SelectPlatform { .. } => TransitionKind::SelectPlatform,
            Transition::Login { .. } => TransitionKind::Login,
            Transition::CompleteOnboarding { .. } => TransitionKind::CompleteOnboarding,
            Transition::CompleteBuyerRegistration { .. } => {
                TransitionKind::CompleteBuyerRegistration
            }
            Transition::SelectBuyerPath { .. } => TransitionKind::SelectBuyerPath,
            Transition::CompleteWizard => TransitionKind::CompleteWizard,
            Transition::UpdateOwnerProfile { .. } => TransitionKind::UpdateOwnerProfile,
            Transition::UpdateBuyerProfile { .. } => TransitionKind::UpdateBuyerProfile,
            Transition::Logout => TransitionKind::Logout,
        }
    }

    /// Get display label for the transition
    pub fn display_label(&self) -> String {
        match self {
            Transition::SelectPlatform { platform } => format!("select-platform({})", platform),
            Transition::Login { email, .. } => format!("login({})", email),
            Transition::SelectBuyerPath { path } => format!("select-buyer-path({})", path),
            other => other.kind().to_string(),
        }
    }
}

/// Apply `transition` to `state`, returning the next state.
///
/// Never fails: reachability is checked by the caller when it wants it.
/// `seed` is only read by logout.
pub fn apply(
    state: &ApplicationState,
    transition: Transition,
    seed: &SeedProfiles,
) -> ApplicationState {
    let mut next = state.clone();

    match transition {
        Transition::SelectPlatform { platform } => {
            next.has_selected_platform = true;
            next.platform_type = platform;
            next.current_view = if platform == Platform::Owner {
                View::Login
            } else {
                View::BuyerRegistration
            };
        }
        Transition::Login { email, is_new_user } => {
            tracing::trace!(is_new_user, "login");
            next.is_logged_in = true;
            // Written regardless of platform; buyers normally register instead.
            next.owner_profile.email = email;
            next.current_view = if next.platform_type == Platform::Owner {
                View::Questionnaire
            } else {
                View::BuyerPlatformChoice
            };
        }
        Transition::CompleteOnboarding { profile } => {
            let persona = profile.derived_persona();
            next.has_completed_onboarding = true;
            next.current_view = View::Dashboard;
            next.owner_profile = OwnerProfile {
                persona: Some(persona),
                ..profile
            };
        }
        Transition::CompleteBuyerRegistration { profile } => {
            next.is_logged_in = true;
            next.current_view = View::BuyerPlatformChoice;
            next.buyer_profile = profile;
        }
        Transition::SelectBuyerPath { path } => {
            next.current_view = match path {
                BuyerPath::Wizard => View::Wizard,
                BuyerPath::Database => View::VehicleBrowser,
            };
        }
        Transition::CompleteWizard => {
            next.wizard_completed = true;
            next.current_view = View::Recommendations;
        }
        Transition::UpdateOwnerProfile { changes } => {
            changes.apply_to(&mut next.owner_profile);
        }
        Transition::UpdateBuyerProfile { changes } => {
            changes.apply_to(&mut next.buyer_profile);
        }
        Transition::Logout => {
            next = ApplicationState::initial(seed);
        }
    }

    next
}
