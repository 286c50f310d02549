//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::Result;
use crate::cli::output;

/// Run command implementation
pub mod run {
    use super::*;
    use crate::Config;
    use crate::cli::StateFormat;
    use crate::script::SessionScript;
    use crate::state_machine::Controller;
    use std::path::Path;

    /// Execute the run command
    pub fn execute(
        w: &mut impl std::io::Write,
        script: &Path,
        format: StateFormat,
        strict: bool,
        config: &Config,
    ) -> Result<()> {
        tracing::info!("Loading session script from {:?}", script);
        let script = SessionScript::from_file(script)?;

        let mut options = config.controller_options();
        options.strict |= strict;

        let mut controller = Controller::with_options(config.seed(), options);
        let applied = script.replay(&mut controller)?;
        tracing::info!("Applied {} transitions", applied);

        let journal: Vec<_> = controller.history().cloned().collect();
        match format {
            StateFormat::Json => output::output_state_json(w, controller.state(), &journal),
            StateFormat::Table => output::output_state_table(w, controller.state(), &journal),
        }
    }
}

/// Graph command implementation
pub mod graph {
    use super::*;
    use crate::cli::GraphFormat;
    use crate::state_machine::NavigationGraph;

    /// Execute the graph command
    pub fn execute(w: &mut impl std::io::Write, format: GraphFormat) -> Result<()> {
        tracing::info!("Building navigation graph...");
        let nav = NavigationGraph::build();

        match format {
            GraphFormat::Dot => {
                write!(w, "{}", nav.to_dot())?;
                Ok(())
            }
            GraphFormat::Json => output::output_graph_json(w, &nav),
            GraphFormat::Table => output::output_graph_table(w, &nav),
        }
    }
}

/// Persona command implementation
pub mod persona {
    use super::*;
    use crate::profile::{ChargingBehavior, UsagePattern, persona};

    /// Execute the persona command
    pub fn execute(
        w: &mut impl std::io::Write,
        usage: UsagePattern,
        charging: ChargingBehavior,
    ) -> Result<()> {
        let persona = persona::classify(usage, charging);
        tracing::debug!(%usage, %charging, %persona, "Classified persona");
        writeln!(w, "{}", persona)?;
        Ok(())
    }
}

/// Show command implementation
pub mod show {
    use super::*;
    use crate::Config;
    use crate::cli::StateFormat;
    use crate::state_machine::ApplicationState;

    /// Execute the show command
    pub fn execute(
        w: &mut impl std::io::Write,
        format: StateFormat,
        config: &Config,
    ) -> Result<()> {
        let state = ApplicationState::initial(&config.seed());
        match format {
            StateFormat::Json => output::output_state_json(w, &state, &[]),
            StateFormat::Table => output::output_state_table(w, &state, &[]),
        }
    }
}
