//! Regulatory constants for the Construction General Permit.
//!
//! Defined once and referenced everywhere, including tests. The trigger
//! threshold and inspection window are hard regulatory contract values;
//! never re-declare them at a call site.

pub use swppp_types::{DEFAULT_WORK_END_HOUR, DEFAULT_WORK_START_HOUR};

/// Rain event depth that triggers a site inspection, in inches.
///
/// The comparison against this threshold is exact `>=`: 0.2499999" does not
/// trigger, 0.25" does. No epsilon band.
pub const RAIN_TRIGGER_INCHES: f64 = 0.25;

/// Hours allowed between a triggering rain event and the inspection.
pub const INSPECTION_WINDOW_HOURS: i64 = 24;

/// Per-violation fine schedule, whole dollars per day of noncompliance.
pub const FINE_MIN_PER_VIOLATION: u64 = 25_000;
pub const FINE_MAX_PER_VIOLATION: u64 = 50_000;
pub const FINE_DAILY_PER_VIOLATION: u64 = 25_000;
