use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Default site working hours under the permit: 07:00 local
pub const DEFAULT_WORK_START_HOUR: u32 = 7;
/// Default site working hours under the permit: 17:00 local
pub const DEFAULT_WORK_END_HOUR: u32 = 17;

/// Daily window during which an inspection deadline may legally fall.
///
/// Hours use the 0-23 clock. The window is half-open: a deadline may fall at
/// `start_hour:00` but not at `end_hour:00`. Callers override the default
/// per site; the engine rejects a window where `start_hour >= end_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl WorkingHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_WORK_START_HOUR,
            end_hour: DEFAULT_WORK_END_HOUR,
        }
    }
}

/// A computed inspection deadline.
///
/// Derived value: carries the inputs that produced it so the deadline can be
/// audited and recomputed, never stored as the sole source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDeadline {
    pub triggering_event_at: NaiveDateTime,
    pub deadline_at: NaiveDateTime,
    pub working_hours: WorkingHours,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_working_hours() {
        let hours = WorkingHours::default();
        assert_eq!(hours.start_hour, 7);
        assert_eq!(hours.end_hour, 17);
    }

    #[test]
    fn test_working_hours_serializes_with_wire_names() {
        let json = serde_json::to_string(&WorkingHours::default()).unwrap();
        assert_eq!(json, "{\"startHour\":7,\"endHour\":17}");
    }
}
