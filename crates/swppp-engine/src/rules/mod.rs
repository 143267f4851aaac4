//! Federal inspection rules.
//!
//! Each module covers one independently-evaluable rule family; the federal
//! layer unions their results. Every rule is a pure function of the
//! inspection record.

pub mod bmps;
pub mod discharge;
pub mod logged;
pub mod weather;

pub use bmps::check_bmps;
pub use discharge::check_discharge_points;
pub use logged::check_logged_violations;
pub use weather::check_weather_consistency;
