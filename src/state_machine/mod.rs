//! State machine module - Application navigation state and its transitions

pub mod controller;
pub mod flow;
pub mod graph;
pub mod guard;
pub mod provider;
pub mod state;
pub mod transition;

// Re-export key types
pub use controller::{Controller, ControllerOptions, JournalEntry, SubscriptionId};
pub use flow::{Flow, Screen};
pub use graph::{GraphStats, NavigationGraph};
pub use provider::{SharedController, StateProvider};
pub use state::{ActiveProfile, ApplicationState, BuyerPath, Platform, View};
pub use transition::{Transition, TransitionKind};
