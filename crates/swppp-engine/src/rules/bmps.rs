// BMP completeness checks: every control must be documented and functioning.
use swppp_types::{Bmp, ComplianceValidation};

/// Validate the best-management-practice records on an inspection.
pub fn check_bmps(bmps: &[Bmp]) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    if bmps.is_empty() {
        result
            .violations
            .push("No BMPs documented for this inspection".to_string());
    }

    let non_functional = bmps.iter().filter(|b| !b.functional).count();
    if non_functional > 0 {
        result.violations.push(format!(
            "{} BMP(s) not functioning properly and require corrective action",
            non_functional
        ));
    }

    let needs_maintenance = bmps.iter().filter(|b| b.maintenance_required).count();
    if needs_maintenance > 0 {
        result.warnings.push(format!(
            "{} BMP(s) require maintenance within 7 days",
            needs_maintenance
        ));
    }

    result.is_compliant = result.violations.is_empty();
    result
}
