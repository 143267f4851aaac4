// Weather-triggered consistency checks.
//
// Internal-consistency only: this cross-checks what the submitted record
// claims against the trigger threshold, independent of live rain detection.
use swppp_types::ComplianceValidation;

use crate::constants::RAIN_TRIGGER_INCHES;

/// Cross-check a weather-triggered inspection against its recorded
/// precipitation.
pub fn check_weather_consistency(
    weather_triggered: bool,
    precipitation_inches: Option<f64>,
) -> ComplianceValidation {
    let mut result = ComplianceValidation::compliant();

    if weather_triggered {
        match precipitation_inches {
            None => {
                result.warnings.push(
                    "Weather-triggered inspection has no precipitation measurement on record"
                        .to_string(),
                );
            }
            Some(amount) if amount < RAIN_TRIGGER_INCHES => {
                result.warnings.push(format!(
                    "Recorded precipitation ({}\") is below the {}\" trigger threshold",
                    amount, RAIN_TRIGGER_INCHES
                ));
            }
            Some(_) => {}
        }
    }

    result
}
