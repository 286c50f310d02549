//! Typed navigation flow
//!
//! [`Screen<S>`] pairs an [`ApplicationState`] with a marker for the view it is
//! on. Only the transitions reachable from that view exist as methods, so a
//! call like completing the wizard from the dashboard does not compile.
//! All methods delegate to [`transition::apply`].

use std::marker::PhantomData;
use std::sync::Arc;

use crate::profile::{
    BuyerProfile, BuyerProfileUpdate, OwnerProfile, OwnerProfileUpdate, SeedProfiles,
};
use crate::state_machine::{ApplicationState, BuyerPath, Platform, Transition, View, transition};
use crate::{Error, Result};

/// Marker for a concrete view
pub trait ViewMarker {
    const VIEW: View;
}

macro_rules! markers {
    ($($name:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name;

            impl ViewMarker for $name {
                const VIEW: View = View::$name;
            }
        )+
    };
}

markers!(
    PlatformSelection,
    Login,
    BuyerRegistration,
    BuyerPlatformChoice,
    Questionnaire,
    Dashboard,
    Wizard,
    VehicleBrowser,
    Recommendations,
);

/// Application state known to be on view `S`.
///
/// The seed a session started from travels with every screen, so logout
/// always restores that seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen<S: ViewMarker> {
    state: ApplicationState,
    seed: Arc<SeedProfiles>,
    _view: PhantomData<S>,
}

impl<S: ViewMarker> Screen<S> {
    fn wrap(state: ApplicationState, seed: Arc<SeedProfiles>) -> Self {
        Self {
            state,
            seed,
            _view: PhantomData,
        }
    }

    fn step<T: ViewMarker>(self, transition: Transition) -> Screen<T> {
        let state = transition::apply(&self.state, transition, &self.seed);
        // Holds while platform_type agrees with the view, which start and
        // resume both guarantee.
        debug_assert_eq!(state.current_view, T::VIEW);
        Screen::wrap(state, self.seed)
    }

    pub fn view(&self) -> View {
        S::VIEW
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn seed(&self) -> &SeedProfiles {
        &self.seed
    }

    pub fn into_state(self) -> ApplicationState {
        self.state
    }

    /// Persist in-progress owner form fields; stays on this view
    pub fn update_owner_profile(&mut self, changes: OwnerProfileUpdate) {
        changes.apply_to(&mut self.state.owner_profile);
    }

    /// Persist in-progress buyer form fields; stays on this view
    pub fn update_buyer_profile(&mut self, changes: BuyerProfileUpdate) {
        changes.apply_to(&mut self.state.buyer_profile);
    }

    pub fn logout(self) -> Screen<PlatformSelection> {
        self.step(Transition::Logout)
    }
}

impl Screen<PlatformSelection> {
    /// Start a session from the seed profiles
    pub fn start(seed: impl Into<Arc<SeedProfiles>>) -> Self {
        let seed = seed.into();
        Self::wrap(ApplicationState::initial(&seed), seed)
    }

    pub fn choose_owner(self) -> Screen<Login> {
        self.step(Transition::SelectPlatform {
            platform: Platform::Owner,
        })
    }

    pub fn choose_buyer(self) -> Screen<BuyerRegistration> {
        self.step(Transition::SelectPlatform {
            platform: Platform::Buyer,
        })
    }
}

impl Screen<Login> {
    pub fn login(self, email: impl Into<String>, is_new_user: bool) -> Screen<Questionnaire> {
        self.step(Transition::Login {
            email: email.into(),
            is_new_user,
        })
    }

    /// Switch to the buyer track before signing in
    pub fn choose_buyer(self) -> Screen<BuyerRegistration> {
        self.step(Transition::SelectPlatform {
            platform: Platform::Buyer,
        })
    }
}

impl Screen<Questionnaire> {
    pub fn complete_onboarding(self, profile: OwnerProfile) -> Screen<Dashboard> {
        self.step(Transition::CompleteOnboarding { profile })
    }
}

impl Screen<BuyerRegistration> {
    pub fn complete_registration(self, profile: BuyerProfile) -> Screen<BuyerPlatformChoice> {
        self.step(Transition::CompleteBuyerRegistration { profile })
    }

    /// Switch to the owner track before registering
    pub fn choose_owner(self) -> Screen<Login> {
        self.step(Transition::SelectPlatform {
            platform: Platform::Owner,
        })
    }
}

impl Screen<BuyerPlatformChoice> {
    pub fn open_wizard(self) -> Screen<Wizard> {
        self.step(Transition::SelectBuyerPath {
            path: BuyerPath::Wizard,
        })
    }

    pub fn open_vehicle_browser(self) -> Screen<VehicleBrowser> {
        self.step(Transition::SelectBuyerPath {
            path: BuyerPath::Database,
        })
    }
}

impl Screen<Wizard> {
    pub fn complete(self) -> Screen<Recommendations> {
        self.step(Transition::CompleteWizard)
    }
}

/// Any screen, tagged by its view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    PlatformSelection(Screen<PlatformSelection>),
    Login(Screen<Login>),
    BuyerRegistration(Screen<BuyerRegistration>),
    BuyerPlatformChoice(Screen<BuyerPlatformChoice>),
    Questionnaire(Screen<Questionnaire>),
    Dashboard(Screen<Dashboard>),
    Wizard(Screen<Wizard>),
    VehicleBrowser(Screen<VehicleBrowser>),
    Recommendations(Screen<Recommendations>),
}

impl Flow {
    /// Re-enter the typed API from an untyped state.
    ///
    /// Fails with [`Error::InconsistentState`] when the view belongs to a
    /// track other than `platform_type`.
    pub fn resume(state: ApplicationState, seed: impl Into<Arc<SeedProfiles>>) -> Result<Self> {
        let view = state.current_view;
        let track = view.platform();
        if track != Platform::None && track != state.platform_type {
            tracing::warn!(%view, platform = %state.platform_type, "Refusing to resume state");
            return Err(Error::InconsistentState {
                view,
                platform: state.platform_type,
            });
        }

        let seed = seed.into();
        Ok(match view {
            View::PlatformSelection => Flow::PlatformSelection(Screen::wrap(state, seed)),
            View::Login => Flow::Login(Screen::wrap(state, seed)),
            View::BuyerRegistration => Flow::BuyerRegistration(Screen::wrap(state, seed)),
            View::BuyerPlatformChoice => Flow::BuyerPlatformChoice(Screen::wrap(state, seed)),
            View::Questionnaire => Flow::Questionnaire(Screen::wrap(state, seed)),
            View::Dashboard => Flow::Dashboard(Screen::wrap(state, seed)),
            View::Wizard => Flow::Wizard(Screen::wrap(state, seed)),
            View::VehicleBrowser => Flow::VehicleBrowser(Screen::wrap(state, seed)),
            View::Recommendations => Flow::Recommendations(Screen::wrap(state, seed)),
        })
    }

    pub fn state(&self) -> &ApplicationState {
        match self {
            Flow::PlatformSelection(s) => s.state(),
            Flow::Login(s) => s.state(),
            Flow::BuyerRegistration(s) => s.state(),
            Flow::BuyerPlatformChoice(s) => s.state(),
            Flow::Questionnaire(s) => s.state(),
            Flow::Dashboard(s) => s.state(),
            Flow::Wizard(s) => s.state(),
            Flow::VehicleBrowser(s) => s.state(),
            Flow::Recommendations(s) => s.state(),
        }
    }

    pub fn view(&self) -> View {
        self.state().current_view
    }
}

macro_rules! into_flow {
    ($($name:ident),+ $(,)?) => {
        $(
            impl From<Screen<$name>> for Flow {
                fn from(screen: Screen<$name>) -> Self {
                    Flow::$name(screen)
                }
            }
        )+
    };
}

into_flow!(
    PlatformSelection,
    Login,
    BuyerRegistration,
    BuyerPlatformChoice,
    Questionnaire,
    Dashboard,
    Wizard,
    VehicleBrowser,
    Recommendations,
);
