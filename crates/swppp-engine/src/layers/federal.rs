//! Federal layer - Construction General Permit baseline.
//!
//! Applies to every construction site regardless of state: BMP completeness,
//! discharge-point completeness, logged-violation triage, and consistency of
//! weather-triggered submissions.

use swppp_types::{ComplianceValidation, SwpppInspection};

use crate::rules;

/// Run all federal checks and union the results.
///
/// The verdict is `is_compliant = violations.is_empty()`; warnings and
/// recommendations never affect it.
pub fn check_federal_compliance(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    result = result.merge(rules::check_bmps(&inspection.bmps));
    result = result.merge(rules::check_discharge_points(&inspection.discharge_points));
    result = result.merge(rules::check_logged_violations(&inspection.violations));
    result = result.merge(rules::check_weather_consistency(
        inspection.weather_triggered,
        inspection.precipitation_inches,
    ));

    if inspection
        .additional_notes
        .as_deref()
        .map_or(true, |notes| notes.trim().is_empty())
    {
        result
            .recommendations
            .push("Add site observations to the inspection notes".to_string());
    }

    result
}
