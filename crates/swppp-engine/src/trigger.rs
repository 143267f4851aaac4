//! Rain-trigger detection per the Construction General Permit.
//!
//! A precipitation event of 0.25" or more requires a site inspection within
//! the 24-hour window. The threshold comparison is exact: no rounding, no
//! tolerance band.

use swppp_types::PrecipitationReading;
use tracing::debug;

use crate::constants::RAIN_TRIGGER_INCHES;
use crate::error::EngineError;

/// Decide whether a precipitation amount triggers a mandatory inspection.
///
/// Negative or non-finite input is a caller bug and is rejected with
/// `InvalidInput` rather than clamped to `false`.
pub fn requires_inspection(amount_inches: f64) -> Result<bool, EngineError> {
    if !amount_inches.is_finite() {
        return Err(EngineError::InvalidInput(format!(
            "precipitation must be a finite number of inches (got {})",
            amount_inches
        )));
    }
    if amount_inches < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "precipitation cannot be negative (got {}\")",
            amount_inches
        )));
    }

    Ok(amount_inches >= RAIN_TRIGGER_INCHES)
}

/// Convenience over a full reading. Same trigger policy as
/// [`requires_inspection`].
pub fn reading_requires_inspection(reading: &PrecipitationReading) -> Result<bool, EngineError> {
    let triggered = requires_inspection(reading.amount_inches)?;
    if triggered {
        debug!(
            amount_inches = reading.amount_inches,
            source = ?reading.source,
            observed_at = %reading.observed_at,
            "precipitation crossed the inspection trigger"
        );
    }
    Ok(triggered)
}
