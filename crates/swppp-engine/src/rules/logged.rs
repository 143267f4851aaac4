// Checks over the violations the field inspector logged during walkthrough.
use swppp_types::{ComplianceValidation, Severity, Violation};

/// Evaluate inspector-logged violations.
///
/// Critical entries fail the inspection outright; entries missing a
/// corrective action only produce a recommendation and never block
/// compliance.
pub fn check_logged_violations(violations: &[Violation]) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    let critical = violations
        .iter()
        .filter(|v| v.severity == Severity::Critical)
        .count();
    if critical > 0 {
        result.violations.push(format!(
            "{} critical violation(s) logged requiring immediate action",
            critical
        ));
    }

    let undocumented = violations
        .iter()
        .filter(|v| v.corrective_action.is_none())
        .count();
    if undocumented > 0 {
        result.recommendations.push(format!(
            "Document corrective actions for {} logged violation(s)",
            undocumented
        ));
    }

    result.is_compliant = result.violations.is_empty();
    result
}
