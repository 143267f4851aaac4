// Discharge-point checks: every outfall documented, turbid discharges flagged.
use swppp_types::{ComplianceValidation, DischargePoint};

/// Validate the discharge-point records on an inspection.
pub fn check_discharge_points(points: &[DischargePoint]) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    if points.is_empty() {
        result
            .violations
            .push("No discharge points documented for this inspection".to_string());
    }

    let actionable = points
        .iter()
        .filter(|p| p.has_discharge && p.turbidity.is_actionable())
        .count();
    if actionable > 0 {
        result.violations.push(format!(
            "{} discharge point(s) show potential violations (turbid discharge observed)",
            actionable
        ));
    }

    result.is_compliant = result.violations.is_empty();
    result
}
