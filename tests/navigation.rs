use ev_journey::profile::{
    BuyerProfile, ChargingBehavior, CurrentVehicle, EvInterest, OwnerProfile, OwnerProfileUpdate,
    Persona, SeedProfiles, UsagePattern,
};
use ev_journey::state_machine::{
    ApplicationState, BuyerPath, Controller, Platform, StateProvider, Transition, View,
};
use pretty_assertions::assert_eq;

fn owner_answers(usage: UsagePattern, charging: ChargingBehavior) -> OwnerProfile {
    OwnerProfile {
        email: "a@b.com".to_string(),
        zip_code: "94105".to_string(),
        name: "A".to_string(),
        age: 30,
        car_make: "Kia".to_string(),
        car_model: "EV6".to_string(),
        car_year: 2023,
        mileage: 12_000,
        usage_pattern: usage,
        has_home_charger: true,
        home_charger_type: "Level 2".to_string(),
        charging_behavior: charging,
        persona: None,
    }
}

fn jo() -> BuyerProfile {
    BuyerProfile {
        first_name: "Jo".to_string(),
        last_name: "Park".to_string(),
        email: "jo@example.com".to_string(),
        zip_code: "10001".to_string(),
        country: "US".to_string(),
        age: "25-34".to_string(),
        interested_in_ev: EvInterest::SomewhatInterested,
        current_vehicle: CurrentVehicle::Gasoline,
    }
}

#[test]
fn buyer_journey_end_to_end() {
    let mut controller = Controller::default();

    controller.select_platform(Platform::Buyer).unwrap();
    assert_eq!(controller.current_view(), View::BuyerRegistration);

    controller.complete_buyer_registration(jo()).unwrap();
    assert!(controller.state().is_logged_in);
    assert_eq!(controller.current_view(), View::BuyerPlatformChoice);

    controller.select_buyer_path(BuyerPath::Wizard).unwrap();
    assert_eq!(controller.current_view(), View::Wizard);

    controller.complete_wizard().unwrap();
    assert!(controller.state().wizard_completed);
    assert_eq!(controller.current_view(), View::Recommendations);
}

#[test]
fn owner_journey_end_to_end() {
    let mut controller = Controller::default();

    controller.select_platform(Platform::Owner).unwrap();
    assert_eq!(controller.current_view(), View::Login);

    controller.login("a@b.com", false).unwrap();
    assert_eq!(controller.current_view(), View::Questionnaire);
    assert_eq!(controller.state().owner_profile.email, "a@b.com");

    controller
        .complete_onboarding(owner_answers(
            UsagePattern::LongDistance,
            ChargingBehavior::Overnight,
        ))
        .unwrap();
    assert_eq!(controller.current_view(), View::Dashboard);
    assert_eq!(
        controller.state().owner_profile.persona,
        Some(Persona::Performance)
    );
}

#[test]
fn logout_after_any_sequence_restores_defaults() {
    let seed = SeedProfiles::default();
    let initial = ApplicationState::initial(&seed);
    let mut controller = Controller::new(seed);

    controller.select_platform(Platform::Owner).unwrap();
    controller.login("a@b.com", true).unwrap();
    controller
        .complete_onboarding(owner_answers(UsagePattern::Mixed, ChargingBehavior::Fast))
        .unwrap();
    controller
        .update_owner_profile(OwnerProfileUpdate {
            mileage: Some(99),
            ..Default::default()
        })
        .unwrap();
    controller.select_platform(Platform::Buyer).unwrap();
    controller.complete_buyer_registration(jo()).unwrap();
    controller.select_buyer_path(BuyerPath::Database).unwrap();

    controller.logout().unwrap();

    assert_eq!(*controller.state(), initial);
    // profiles revert to the seed, not to blanks
    assert_eq!(controller.state().owner_profile.name, "Sarah Johnson");
    assert_eq!(controller.state().owner_profile.persona, None);
}

#[test]
fn onboarding_twice_keeps_only_latest_persona() {
    let mut controller = Controller::default();

    controller
        .complete_onboarding(owner_answers(
            UsagePattern::LongDistance,
            ChargingBehavior::Overnight,
        ))
        .unwrap();
    controller
        .complete_onboarding(owner_answers(
            UsagePattern::CityDriving,
            ChargingBehavior::HomeSlow,
        ))
        .unwrap();

    assert_eq!(
        controller.state().owner_profile.persona,
        Some(Persona::Carefree)
    );
}

#[test]
fn partial_update_preserves_other_fields() {
    let mut controller = Controller::default();
    controller
        .complete_onboarding(owner_answers(
            UsagePattern::Mixed,
            ChargingBehavior::Overnight,
        ))
        .unwrap();

    controller
        .update_owner_profile(OwnerProfileUpdate {
            age: Some(31),
            ..Default::default()
        })
        .unwrap();

    let profile = &controller.state().owner_profile;
    assert_eq!(profile.name, "A");
    assert_eq!(profile.age, 31);
    assert_eq!(controller.current_view(), View::Dashboard);
}

#[test]
fn provider_drives_the_same_rules() {
    let provider = StateProvider::new();
    assert!(provider.snapshot().unwrap_err().is_not_initialized());

    let mut provider = provider;
    provider.install(Controller::default());

    provider
        .dispatch(Transition::SelectPlatform {
            platform: Platform::Owner,
        })
        .unwrap();
    let state = provider
        .dispatch(Transition::Login {
            email: "a@b.com".to_string(),
            is_new_user: false,
        })
        .unwrap();

    assert_eq!(state.current_view, View::Questionnaire);
    assert!(state.is_logged_in);
}

#[test]
fn bundled_session_scripts_replay_strictly() {
    use ev_journey::script::SessionScript;
    use ev_journey::state_machine::ControllerOptions;
    use std::path::Path;

    let sessions = Path::new(env!("CARGO_MANIFEST_DIR")).join("sessions");
    let strict = ControllerOptions {
        strict: true,
        ..Default::default()
    };

    let owner = SessionScript::from_file(sessions.join("owner-onboarding.toml")).unwrap();
    let mut controller = Controller::with_options(SeedProfiles::default(), strict);
    owner.replay(&mut controller).unwrap();
    assert_eq!(controller.current_view(), View::Dashboard);
    assert_eq!(
        controller.state().owner_profile.persona,
        Some(Persona::Performance)
    );
    assert_eq!(controller.state().owner_profile.car_model, "Mustang Mach-E");

    let buyer = SessionScript::from_file(sessions.join("buyer-wizard.toml")).unwrap();
    let mut controller = Controller::with_options(SeedProfiles::default(), strict);
    buyer.replay(&mut controller).unwrap();
    assert_eq!(controller.current_view(), View::Recommendations);
    assert_eq!(controller.history().count(), 4);
}
