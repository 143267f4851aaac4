// Fine exposure estimation, linear in the violation count.
use swppp_types::FineEstimate;

use crate::constants::{FINE_DAILY_PER_VIOLATION, FINE_MAX_PER_VIOLATION, FINE_MIN_PER_VIOLATION};

/// Estimate the financial exposure for a set of violations.
///
/// Zero violations yields an all-zero estimate.
pub fn estimate_fines(violations: &[String]) -> FineEstimate {
    let count = violations.len() as u64;
    FineEstimate {
        min_fine: count * FINE_MIN_PER_VIOLATION,
        max_fine: count * FINE_MAX_PER_VIOLATION,
        daily_fine: count * FINE_DAILY_PER_VIOLATION,
    }
}
