pub mod calendar;
pub mod constants;
pub mod error;
pub mod fines;
pub mod jurisdiction;
pub mod layers;
pub mod rules;
pub mod states;
pub mod trigger;

use swppp_types::{ComplianceValidation, FineEstimate, SwpppInspection};
use tracing::debug;

pub use calendar::{compute_deadline, compute_deadline_record, validate_working_hours};
pub use error::EngineError;
pub use fines::estimate_fines;
pub use jurisdiction::StateCode;
pub use trigger::{reading_requires_inspection, requires_inspection};

/// Federal compliance verdict for a completed inspection.
pub fn validate(inspection: &SwpppInspection) -> ComplianceValidation {
    layers::check_federal_compliance(inspection)
}

/// Federal verdict plus the state overlay for `state_code`.
///
/// An unrecognized code is not an error: the overlay is a no-op and the
/// federal verdict is returned unchanged.
pub fn validate_jurisdiction(state_code: &str, inspection: &SwpppInspection) -> ComplianceValidation {
    let federal = layers::check_federal_compliance(inspection);
    match StateCode::parse_code(state_code) {
        Some(state) => federal.merge(states::check_state_overlay(state, inspection)),
        None => federal,
    }
}

/// Compliance engine entry point.
///
/// Stateless: every evaluation is a pure function of the inspection record,
/// safe to call concurrently and to memoize by input value.
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate an inspection, applying the jurisdiction overlay when the
    /// record names one.
    pub fn evaluate(&self, inspection: &SwpppInspection) -> ComplianceValidation {
        let result = match inspection.jurisdiction.as_deref() {
            Some(code) => validate_jurisdiction(code, inspection),
            None => validate(inspection),
        };
        debug!(
            is_compliant = result.is_compliant,
            violations = result.violations.len(),
            warnings = result.warnings.len(),
            "evaluated inspection"
        );
        result
    }

    /// Estimated fine exposure for a verdict's violations.
    pub fn fine_exposure(&self, validation: &ComplianceValidation) -> FineEstimate {
        fines::estimate_fines(&validation.violations)
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
