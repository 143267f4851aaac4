//! California Construction Stormwater General Permit overlay.
//!
//! SWRCB Order 2022-0057-DWQ. Key additions on top of the federal baseline:
//! - Numeric action levels for turbidity: a visibly very turbid discharge
//!   exceeds the NAL and requires sampling and an exceedance report
//! - On-site rain gauge: qualifying storm events must carry a measured
//!   precipitation value in the inspection record

use swppp_types::{ComplianceValidation, SwpppInspection, Turbidity};

/// Check all California-specific requirements.
pub fn check_california_overlay(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    result = result.merge(check_numeric_action_levels(inspection));
    result = result.merge(check_rain_gauge_record(inspection));

    result
}

/// Turbidity numeric action levels (Order 2022-0057-DWQ, Attachment C).
fn check_numeric_action_levels(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    let exceedances = inspection
        .discharge_points
        .iter()
        .filter(|p| p.has_discharge && p.turbidity == Turbidity::VeryTurbid)
        .count();
    if exceedances > 0 {
        result.violations.push(format!(
            "{} discharge point(s) exceed the California turbidity numeric action level; \
             sampling and an exceedance report are required",
            exceedances
        ));
    }

    result.is_compliant = result.violations.is_empty();
    result
}

/// Rain gauge record requirement for qualifying storm events.
fn check_rain_gauge_record(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    if inspection.weather_triggered && inspection.precipitation_inches.is_none() {
        result.warnings.push(
            "California requires an on-site rain gauge measurement for qualifying storm events"
                .to_string(),
        );
    }

    result
}
