pub mod deadline;
pub mod types;
pub mod weather;

pub use deadline::{InspectionDeadline, WorkingHours, DEFAULT_WORK_END_HOUR, DEFAULT_WORK_START_HOUR};
pub use types::{
    Bmp, ComplianceValidation, DischargePoint, FineEstimate, Severity, SwpppInspection, Turbidity,
    Violation,
};
pub use weather::{PrecipitationReading, ReadingSource};
