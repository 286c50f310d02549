//! State provider
//!
//! The provider is what the view tree root is handed. It starts empty and
//! every access fails with [`Error::NotInitialized`] until a controller is
//! installed, so composition mistakes surface instead of reading defaults.

use std::sync::{Arc, RwLock};

use crate::state_machine::controller::notify;
use crate::state_machine::{ApplicationState, Controller, Transition};
use crate::{Error, Result};

pub type SharedController = Arc<RwLock<Controller>>;

#[derive(Debug, Clone, Default)]
pub struct StateProvider {
    controller: Option<SharedController>,
}

impl StateProvider {
    /// Provider with no controller installed
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider already wired to `controller`
    pub fn from_controller(controller: Controller) -> Self {
        let mut provider = Self::new();
        provider.install(controller);
        provider
    }

    /// Install (or replace) the controller, returning the shared handle
    pub fn install(&mut self, controller: Controller) -> SharedController {
        if self.controller.is_some() {
            tracing::warn!("Replacing installed state controller");
        }
        let shared = Arc::new(RwLock::new(controller));
        self.controller = Some(Arc::clone(&shared));
        shared
    }

    pub fn is_initialized(&self) -> bool {
        self.controller.is_some()
    }

    fn shared(&self) -> Result<&SharedController> {
        self.controller.as_ref().ok_or(Error::NotInitialized)
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> Result<Arc<ApplicationState>> {
        let controller = self.shared()?.read().map_err(|_| Error::StateLock)?;
        Ok(controller.snapshot())
    }

    /// Apply a transition under the write lock.
    ///
    /// Observers run after the lock is released, so they may read back
    /// through this provider.
    pub fn dispatch(&self, transition: Transition) -> Result<Arc<ApplicationState>> {
        let (state, observers) = {
            let mut controller = self.shared()?.write().map_err(|_| Error::StateLock)?;
            let state = controller.apply(transition)?;
            (state, controller.observers())
        };
        notify(&observers, &state);
        Ok(state)
    }

    /// Run `f` with exclusive access to the controller.
    ///
    /// Observers notified from inside `f` run under the lock and must not
    /// read through the provider; use [`StateProvider::dispatch`] instead.
    pub fn with_controller<T>(&self, f: impl FnOnce(&mut Controller) -> T) -> Result<T> {
        let mut controller = self.shared()?.write().map_err(|_| Error::StateLock)?;
        Ok(f(&mut controller))
    }
}
