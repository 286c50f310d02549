//! Application state controller
//!
//! The controller owns the one [`ApplicationState`] record and is its only
//! mutation surface. Each applied transition swaps in a fresh snapshot,
//! notifies observers and appends to the journal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::Result;
use crate::profile::{
    BuyerProfile, BuyerProfileUpdate, OwnerProfile, OwnerProfileUpdate, SeedProfiles,
};
use crate::state_machine::{
    ApplicationState, BuyerPath, Platform, Transition, TransitionKind, View, guard, transition,
};

pub const DEFAULT_JOURNAL_LIMIT: usize = 256;

/// Controller behavior knobs, usually taken from config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Reject transitions that are not reachable from the current view
    pub strict: bool,
    /// Maximum number of journal entries kept
    pub journal_limit: usize,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            strict: false,
            journal_limit: DEFAULT_JOURNAL_LIMIT,
        }
    }
}

/// One applied transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub at: DateTime<Utc>,
    pub action: TransitionKind,
    pub from: View,
    pub to: View,
    pub revision: u64,
}

/// Handle returned by [`Controller::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) type Observer = Arc<dyn Fn(&ApplicationState) + Send + Sync>;

pub struct Controller {
    state: Arc<ApplicationState>,
    seed: SeedProfiles,
    options: ControllerOptions,
    revision: u64,
    journal: VecDeque<JournalEntry>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Controller {
    pub fn new(seed: SeedProfiles) -> Self {
        Self::with_options(seed, ControllerOptions::default())
    }

    pub fn with_options(seed: SeedProfiles, options: ControllerOptions) -> Self {
        tracing::debug!(
            strict = options.strict,
            journal_limit = options.journal_limit,
            "Creating state controller"
        );
        Self {
            state: Arc::new(ApplicationState::initial(&seed)),
            seed,
            options,
            revision: 0,
            journal: VecDeque::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state, borrowed
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Current state as a shareable immutable snapshot
    pub fn snapshot(&self) -> Arc<ApplicationState> {
        Arc::clone(&self.state)
    }

    /// Number of transitions applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn current_view(&self) -> View {
        self.state.current_view
    }

    pub fn seed(&self) -> &SeedProfiles {
        &self.seed
    }

    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    /// Applied transitions, oldest first
    pub fn history(&self) -> impl Iterator<Item = &JournalEntry> {
        self.journal.iter()
    }

    /// Transitions the current view accepts in strict mode
    pub fn available_transitions(&self) -> Vec<TransitionKind> {
        guard::available_from(self.state.current_view)
    }

    /// Register a callback run after every applied transition
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&ApplicationState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Arc::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Apply a transition to the current state and notify observers
    pub fn dispatch(&mut self, transition: Transition) -> Result<()> {
        let state = self.apply(transition)?;
        notify(&self.observers(), &state);
        Ok(())
    }

    /// Apply a transition without notifying observers, returning the new snapshot
    pub(crate) fn apply(&mut self, transition: Transition) -> Result<Arc<ApplicationState>> {
        let kind = transition.kind();
        let from = self.state.current_view;

        if self.options.strict
            && let Err(e) = guard::check(kind, from)
        {
            tracing::warn!(action = %kind, view = %from, "Rejecting unreachable transition");
            return Err(e);
        }

        let next = transition::apply(&self.state, transition, &self.seed);
        let to = next.current_view;
        self.state = Arc::new(next);
        self.revision += 1;

        tracing::debug!(action = %kind, %from, %to, revision = self.revision, "Applied transition");

        self.record(kind, from, to);
        Ok(self.snapshot())
    }

    /// Registered observers, in subscription order
    pub(crate) fn observers(&self) -> Vec<Observer> {
        self.observers
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect()
    }

    fn record(&mut self, action: TransitionKind, from: View, to: View) {
        if self.options.journal_limit == 0 {
            return;
        }
        while self.journal.len() >= self.options.journal_limit {
            self.journal.pop_front();
        }
        self.journal.push_back(JournalEntry {
            at: Utc::now(),
            action,
            from,
            to,
            revision: self.revision,
        });
    }

    pub fn select_platform(&mut self, platform: Platform) -> Result<()> {
        self.dispatch(Transition::SelectPlatform { platform })
    }

    pub fn login(&mut self, email: impl Into<String>, is_new_user: bool) -> Result<()> {
        self.dispatch(Transition::Login {
            email: email.into(),
            is_new_user,
        })
    }

    pub fn complete_onboarding(&mut self, profile: OwnerProfile) -> Result<()> {
        self.dispatch(Transition::CompleteOnboarding { profile })
    }

    pub fn complete_buyer_registration(&mut self, profile: BuyerProfile) -> Result<()> {
        self.dispatch(Transition::CompleteBuyerRegistration { profile })
    }

    pub fn select_buyer_path(&mut self, path: BuyerPath) -> Result<()> {
        self.dispatch(Transition::SelectBuyerPath { path })
    }

    pub fn complete_wizard(&mut self) -> Result<()> {
        self.dispatch(Transition::CompleteWizard)
    }

    pub fn update_owner_profile(&mut self, changes: OwnerProfileUpdate) -> Result<()> {
        self.dispatch(Transition::UpdateOwnerProfile { changes })
    }

    pub fn update_buyer_profile(&mut self, changes: BuyerProfileUpdate) -> Result<()> {
        self.dispatch(Transition::UpdateBuyerProfile { changes })
    }

    pub fn logout(&mut self) -> Result<()> {
        self.dispatch(Transition::Logout)
    }
}

pub(crate) fn notify(observers: &[Observer], state: &ApplicationState) {
    for observer in observers {
        observer(state);
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(SeedProfiles::default())
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("revision", &self.revision)
            .field("journal_len", &self.journal.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
