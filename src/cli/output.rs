//! Output formatting module
//!
//! This module handles formatting application state and the navigation graph
//! for different output formats.

use crate::{
    Result,
    state_machine::{ActiveProfile, ApplicationState, JournalEntry, NavigationGraph, View},
};
use serde_json::json;

/// Output state and journal as JSON
pub fn output_state_json(
    w: &mut impl std::io::Write,
    state: &ApplicationState,
    journal: &[JournalEntry],
) -> Result<()> {
    let output = json!({
        "state": state,
        "derivedPersona": state.owner_profile.derived_persona(),
        "journal": journal,
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

/// Output state and journal as text table
pub fn output_state_table(
    w: &mut impl std::io::Write,
    state: &ApplicationState,
    journal: &[JournalEntry],
) -> Result<()> {
    writeln!(w, "EV Journey - Application State")?;
    writeln!(w, "{}", "=".repeat(80))?;
    writeln!(w)?;

    writeln!(w, "Session:")?;
    writeln!(w, "  Current View:        {}", state.current_view)?;
    writeln!(w, "  Platform:            {}", state.platform_type)?;
    writeln!(w, "  Logged In:           {}", state.is_logged_in)?;
    writeln!(w, "  Platform Selected:   {}", state.has_selected_platform)?;
    writeln!(w, "  Onboarding Complete: {}", state.has_completed_onboarding)?;
    writeln!(w, "  Wizard Complete:     {}", state.wizard_completed)?;
    writeln!(w)?;

    let owner = &state.owner_profile;
    writeln!(w, "Owner Profile:")?;
    writeln!(w, "  Name:      {}", owner.name)?;
    writeln!(w, "  Email:     {}", owner.email)?;
    writeln!(w, "  Vehicle:   {}", owner.vehicle_label())?;
    writeln!(w, "  Mileage:   {}", owner.mileage)?;
    writeln!(
        w,
        "  Driving:   {} / {}",
        owner.usage_pattern, owner.charging_behavior
    )?;
    writeln!(
        w,
        "  Persona:   {}",
        owner
            .persona
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string())
    )?;
    writeln!(w)?;

    let buyer = &state.buyer_profile;
    writeln!(w, "Buyer Profile:")?;
    writeln!(w, "  Name:      {}", buyer.full_name())?;
    writeln!(w, "  Email:     {}", buyer.email)?;
    writeln!(w, "  Location:  {} {}", buyer.zip_code, buyer.country)?;
    writeln!(w, "  Interest:  {}", buyer.interested_in_ev)?;
    writeln!(w, "  Drives:    {}", buyer.current_vehicle)?;
    writeln!(w)?;

    let active = match state.active_profile() {
        ActiveProfile::Owner(_) => "owner",
        ActiveProfile::Buyer(_) => "buyer",
        ActiveProfile::None => "none",
    };
    writeln!(w, "Active Profile: {}", active)?;

    if !journal.is_empty() {
        writeln!(w)?;
        writeln!(w, "Journal:")?;
        writeln!(w, "{:-<80}", "")?;
        writeln!(
            w,
            "{:>4} {:<30} {:<22} {:<22}",
            "Rev", "Action", "From", "To"
        )?;
        writeln!(w, "{:-<80}", "")?;

        for entry in journal {
            writeln!(
                w,
                "{:>4} {:<30} {:<22} {:<22}",
                entry.revision,
                entry.action.as_str(),
                entry.from.as_str(),
                entry.to.as_str()
            )?;
        }
    }

    Ok(())
}

/// Output the navigation graph as JSON
pub fn output_graph_json(w: &mut impl std::io::Write, nav: &NavigationGraph) -> Result<()> {
    let output = json!({
        "initial": nav.initial_view(),
        "stats": nav.stats(),
        "steadyStates": nav.steady_state_views(),
        "edges": nav.edges().iter().map(|(from, label, to)| {
            json!({
                "from": from,
                "transition": label,
                "to": to,
            })
        }).collect::<Vec<_>>(),
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?;
    Ok(())
}

/// Output the navigation graph as text table
pub fn output_graph_table(w: &mut impl std::io::Write, nav: &NavigationGraph) -> Result<()> {
    let stats = nav.stats();

    writeln!(w, "EV Journey - Navigation Graph")?;
    writeln!(w, "{}", "=".repeat(80))?;
    writeln!(w)?;
    writeln!(w, "Summary:")?;
    writeln!(w, "  Views:          {}", stats.total_views)?;
    writeln!(w, "  Transitions:    {}", stats.total_transitions)?;
    writeln!(w, "  Reachable:      {}", stats.reachable_views)?;
    writeln!(w, "  Steady States:  {}", stats.steady_state_views)?;
    writeln!(w)?;

    writeln!(w, "{:-<80}", "")?;
    writeln!(w, "{:<22} {:<34} {:<22}", "From", "Transition", "To")?;
    writeln!(w, "{:-<80}", "")?;

    for view in View::ALL {
        for (label, to) in nav.exits(*view) {
            writeln!(w, "{:<22} {:<34} {:<22}", view.as_str(), label, to.as_str())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_machine::{Controller, Platform};

    #[test]
    fn test_output_state_json() {
        let mut controller = Controller::default();
        controller.select_platform(Platform::Buyer).unwrap();
        let journal: Vec<_> = controller.history().cloned().collect();

        let mut buf = Vec::new();
        output_state_json(&mut buf, controller.state(), &journal).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["state"]["currentView"], "buyerRegistration");
        assert_eq!(json["state"]["platformType"], "buyer");
        assert_eq!(json["derivedPersona"], "carefree");
        assert_eq!(json["journal"][0]["action"], "select-platform");
        assert_eq!(json["journal"][0]["to"], "buyerRegistration");
    }

    #[test]
    fn test_output_state_table() {
        let mut controller = Controller::default();
        controller.select_platform(Platform::Owner).unwrap();
        let journal: Vec<_> = controller.history().cloned().collect();

        let mut buf = Vec::new();
        output_state_table(&mut buf, controller.state(), &journal).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("EV Journey - Application State"));
        assert!(output.contains("Current View:        login"));
        assert!(output.contains("2022 Tesla Model 3"));
        assert!(output.contains("Active Profile: owner"));
        assert!(output.contains("select-platform"));
    }

    #[test]
    fn test_output_graph_table() {
        let mut buf = Vec::new();
        output_graph_table(&mut buf, &NavigationGraph::build()).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("Transitions:    16"));
        assert!(output.contains("complete-wizard"));
    }

    #[test]
    fn test_output_graph_json() {
        let mut buf = Vec::new();
        output_graph_json(&mut buf, &NavigationGraph::build()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["initial"], "platformSelection");
        assert_eq!(json["stats"]["total_views"], 9);
        assert_eq!(json["edges"].as_array().unwrap().len(), 16);
    }
}
