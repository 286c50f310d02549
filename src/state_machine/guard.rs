//! Reachability rules used by strict mode
//!
//! Lenient controllers apply every transition. Strict controllers consult
//! [`allowed_from`] first and reject calls made from any other view.

use crate::state_machine::{TransitionKind, View};
use crate::{Error, Result};

const PLATFORM_PICK: &[View] = &[
    View::PlatformSelection,
    View::Login,
    View::BuyerRegistration,
];

/// Views a transition may be invoked from
pub fn allowed_from(kind: TransitionKind) -> &'static [View] {
    match kind {
        TransitionKind::SelectPlatform => PLATFORM_PICK,
        TransitionKind::Login => &[View::Login],
        TransitionKind::CompleteBuyerRegistration => &[View::BuyerRegistration],
        TransitionKind::CompleteOnboarding => &[View::Questionnaire],
        TransitionKind::SelectBuyerPath => &[View::BuyerPlatformChoice],
        TransitionKind::CompleteWizard => &[View::Wizard],
        TransitionKind::UpdateOwnerProfile
        | TransitionKind::UpdateBuyerProfile
        | TransitionKind::Logout => View::ALL,
    }
}

pub fn is_reachable(kind: TransitionKind, view: View) -> bool {
    allowed_from(kind).contains(&view)
}

/// Transitions that may be invoked from `view`
pub fn available_from(view: View) -> Vec<TransitionKind> {
    TransitionKind::ALL
        .iter()
        .copied()
        .filter(|kind| is_reachable(*kind, view))
        .collect()
}

pub fn check(kind: TransitionKind, view: View) -> Result<()> {
    if is_reachable(kind, view) {
        Ok(())
    } else {
        Err(Error::InvalidTransition { action: kind, view })
    }
}
