//! Texas TPDES construction general permit overlay.
//!
//! TXR150000 (TCEQ). Key additions on top of the federal baseline:
//! - Corrective actions must be documented in the SWP3 for every logged
//!   violation, not merely recommended
//! - Critical noncompliance carries a 24-hour TCEQ notification duty

use swppp_types::{ComplianceValidation, Severity, SwpppInspection};

/// Check all Texas-specific requirements.
pub fn check_texas_overlay(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    result = result.merge(check_swp3_documentation(inspection));
    result = result.merge(check_notification_duty(inspection));

    result
}

/// Corrective-action documentation in the SWP3 (TXR150000 Part III.F).
fn check_swp3_documentation(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    let undocumented = inspection
        .violations
        .iter()
        .filter(|v| v.corrective_action.is_none())
        .count();
    if undocumented > 0 {
        result.warnings.push(format!(
            "{} logged violation(s) lack corrective actions; TXR150000 requires them \
             to be documented in the SWP3 within 7 days",
            undocumented
        ));
    }

    result
}

/// 24-hour noncompliance notification (TXR150000 Part V).
fn check_notification_duty(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    let critical = inspection
        .violations
        .iter()
        .filter(|v| v.severity == Severity::Critical)
        .count();
    if critical > 0 {
        result.warnings.push(
            "Critical noncompliance must be reported to TCEQ within 24 hours".to_string(),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use swppp_types::Violation;

    fn base_inspection() -> SwpppInspection {
        SwpppInspection {
            bmps: Vec::new(),
            discharge_points: Vec::new(),
            violations: Vec::new(),
            weather_triggered: false,
            precipitation_inches: None,
            additional_notes: None,
            jurisdiction: Some("TX".to_string()),
        }
    }

    #[test]
    fn test_undocumented_corrective_action_escalates_to_warning() {
        let mut inspection = base_inspection();
        inspection.violations = vec![Violation {
            description: "track-out at south entrance".to_string(),
            severity: Severity::Minor,
            corrective_action: None,
        }];
        let result = check_texas_overlay(&inspection);

        assert!(result.is_compliant);
        assert!(result.warnings.iter().any(|w| w.contains("SWP3")));
    }

    #[test]
    fn test_critical_violation_carries_notification_duty() {
        let mut inspection = base_inspection();
        inspection.violations = vec![Violation {
            description: "untreated discharge to creek".to_string(),
            severity: Severity::Critical,
            corrective_action: Some("berm installed".to_string()),
        }];
        let result = check_texas_overlay(&inspection);

        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("TCEQ within 24 hours")));
    }

    #[test]
    fn test_documented_minor_violations_add_nothing() {
        let mut inspection = base_inspection();
        inspection.violations = vec![Violation {
            description: "silt fence sag".to_string(),
            severity: Severity::Minor,
            corrective_action: Some("re-tension fabric".to_string()),
        }];
        let result = check_texas_overlay(&inspection);
        assert_eq!(result, ComplianceValidation::compliant());
    }
}
