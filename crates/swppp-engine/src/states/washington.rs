//! Washington Construction Stormwater General Permit overlay.
//!
//! Ecology CSWGP (WAC 173-226). Key additions on top of the federal baseline:
//! - Turbidity benchmark (25 NTU): any turbid discharge must be sampled
//! - BMP repair window: failed BMPs must be repaired before the next rain
//!   event, sooner than the federal 7-day maintenance expectation

use swppp_types::{ComplianceValidation, SwpppInspection};

/// Check all Washington-specific requirements.
pub fn check_washington_overlay(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    result = result.merge(check_turbidity_benchmark(inspection));
    result = result.merge(check_bmp_repair_window(inspection));

    result
}

/// Turbidity benchmark sampling (CSWGP S4.C).
fn check_turbidity_benchmark(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    let benchmark_hits = inspection
        .discharge_points
        .iter()
        .filter(|p| p.has_discharge && p.turbidity.is_actionable())
        .count();
    if benchmark_hits > 0 {
        result.warnings.push(format!(
            "{} discharge point(s) likely exceed the 25 NTU benchmark; \
             collect and log turbidity samples",
            benchmark_hits
        ));
    }

    result
}

/// Failed BMPs must be repaired before the next storm (CSWGP S9).
fn check_bmp_repair_window(inspection: &SwpppInspection) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    let failed = inspection.bmps.iter().filter(|b| !b.functional).count();
    if failed > 0 {
        result.warnings.push(format!(
            "{} failed BMP(s) must be repaired before the next rain event under the CSWGP",
            failed
        ));
    }

    result
}
