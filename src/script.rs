//! Session scripts
//!
//! A session script is a TOML file listing transitions in the order the view
//! layer would emit them:
//!
//! ```toml
//! [[step]]
//! action = "select-platform"
//! platform = "buyer"
//!
//! [[step]]
//! action = "select-buyer-path"
//! path = "wizard"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state_machine::{Controller, Transition};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionScript {
    /// Optional human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, rename = "step")]
    pub steps: Vec<Transition>,
}

impl SessionScript {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents).map_err(|e| Error::ScriptParse {
            file: path,
            message: e.to_string(),
        })
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Dispatch every step in order, stopping at the first rejected one.
    ///
    /// Returns the number of steps applied.
    pub fn replay(&self, controller: &mut Controller) -> Result<usize> {
        tracing::info!(
            name = self.name.as_deref().unwrap_or("unnamed"),
            steps = self.steps.len(),
            "Replaying session script"
        );

        for (idx, step) in self.steps.iter().enumerate() {
            let step_no = idx + 1;
            tracing::debug!(step = step_no, transition = %step.display_label(), "Dispatching step");
            controller
                .dispatch(step.clone())
                .map_err(|e| Error::script(step_no, e.to_string()))?;
        }

        Ok(self.steps.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CurrentVehicle, EvInterest, SeedProfiles};
    use crate::state_machine::{ControllerOptions, View};
    use std::io::Write;

    const BUYER_SCRIPT: &str = r#"
name = "buyer wizard"

[[step]]
action = "select-platform"
platform = "buyer"

[[step]]
action = "complete-buyer-registration"

[step.profile]
firstName = "Jo"
lastName = "Park"
email = "jo@example.com"
zipCode = "10001"
country = "US"
age = "25-34"
interestedInEV = "very-interested"
currentVehicle = "gasoline"

[[step]]
action = "select-buyer-path"
path = "wizard"

[[step]]
action = "complete-wizard"
"#;

    #[test]
    fn test_parse_and_replay() {
        let script = SessionScript::parse(BUYER_SCRIPT).unwrap();
        assert_eq!(script.len(), 4);
        assert_eq!(script.name.as_deref(), Some("buyer wizard"));

        let mut controller = Controller::default();
        assert_eq!(script.replay(&mut controller).unwrap(), 4);

        let state = controller.state();
        assert!(state.is_logged_in);
        assert!(state.wizard_completed);
        assert_eq!(state.current_view, View::Recommendations);
        assert_eq!(state.buyer_profile.first_name, "Jo");
        assert_eq!(state.buyer_profile.interested_in_ev, EvInterest::VeryInterested);
        assert_eq!(state.buyer_profile.current_vehicle, CurrentVehicle::Gasoline);
    }

    #[test]
    fn test_strict_replay_reports_step() {
        let script = SessionScript::parse(
            r#"
[[step]]
action = "select-platform"
platform = "owner"

[[step]]
action = "complete-wizard"
"#,
        )
        .unwrap();

        let mut controller = Controller::with_options(
            SeedProfiles::default(),
            ControllerOptions {
                strict: true,
                ..Default::default()
            },
        );

        match script.replay(&mut controller).unwrap_err() {
            Error::Script { step, message } => {
                assert_eq!(step, 2);
                assert!(message.contains("complete-wizard"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(controller.current_view(), View::Login);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUYER_SCRIPT.as_bytes()).unwrap();

        let script = SessionScript::from_file(file.path()).unwrap();
        assert_eq!(script.len(), 4);
    }

    #[test]
    fn test_unknown_action_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[[step]]\naction = \"teleport\"\n").unwrap();

        let err = SessionScript::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::ScriptParse { .. }));
    }

    #[test]
    fn test_empty_script() {
        let script = SessionScript::parse("").unwrap();
        assert!(script.is_empty());
        assert_eq!(script.replay(&mut Controller::default()).unwrap(), 0);
    }
}
