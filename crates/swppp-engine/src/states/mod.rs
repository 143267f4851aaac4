//! State-specific stormwater compliance overlays.
//!
//! Each state module implements the additive checks for that state's
//! construction stormwater general permit. Overlays return findings only -
//! the federal verdict is computed separately and the results are merged by
//! the caller, so an overlay can never weaken the federal baseline.

pub mod california;
pub mod georgia;
pub mod texas;
pub mod washington;

use swppp_types::{ComplianceValidation, SwpppInspection};

use crate::jurisdiction::StateCode;

/// Get state-specific findings for an inspection.
///
/// Recognized states without an implemented overlay return an empty result.
pub fn check_state_overlay(state: StateCode, inspection: &SwpppInspection) -> ComplianceValidation {
    match state {
        StateCode::CA => california::check_california_overlay(inspection),
        StateCode::WA => washington::check_washington_overlay(inspection),
        StateCode::GA => georgia::check_georgia_overlay(inspection),
        StateCode::TX => texas::check_texas_overlay(inspection),
        _ => ComplianceValidation::compliant(),
    }
}
