//! Persona classification
//!
//! Owners who drive long distances or rely on fast charging get the
//! performance dashboard; everyone else gets the carefree one.

use super::{ChargingBehavior, Persona, UsagePattern};

/// Classify an owner from their questionnaire answers
pub fn classify(usage: UsagePattern, charging: ChargingBehavior) -> Persona {
    if usage == UsagePattern::LongDistance || charging == ChargingBehavior::Fast {
        Persona::Performance
    } else {
        Persona::Carefree
    }
}
