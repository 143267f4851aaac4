use serde::{Deserialize, Serialize};

/// One physical erosion/sediment control device inspected on site
/// (silt fence, inlet protection, stabilized entrance, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bmp {
    pub id: String,
    pub functional: bool,
    pub maintenance_required: bool,
}

/// Observed water clarity at a discharge point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Turbidity {
    Clear,
    SlightlyTurbid,
    Turbid,
    VeryTurbid,
}

impl Turbidity {
    /// Turbidity levels that make an active discharge a potential violation.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Turbidity::Turbid | Turbidity::VeryTurbid)
    }
}

/// A location where site runoff may exit into the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DischargePoint {
    pub id: String,
    pub has_discharge: bool,
    pub turbidity: Turbidity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

/// A violation logged by the field inspector during the walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub description: String,
    pub severity: Severity,
    pub corrective_action: Option<String>,
}

/// A completed SWPPP field inspection as submitted by the surrounding
/// application. The engine only reads it and produces a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwpppInspection {
    pub bmps: Vec<Bmp>,
    pub discharge_points: Vec<DischargePoint>,
    pub violations: Vec<Violation>,
    pub weather_triggered: bool,
    pub precipitation_inches: Option<f64>,
    pub additional_notes: Option<String>,
    pub jurisdiction: Option<String>,
}

/// Compliance verdict for one inspection.
///
/// Purely derived: recomputing from the same `SwpppInspection` always yields
/// the identical result. Warnings and recommendations never affect
/// `is_compliant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceValidation {
    pub is_compliant: bool,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ComplianceValidation {
    /// Empty verdict with no findings.
    pub fn compliant() -> Self {
        Self {
            is_compliant: true,
            violations: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Union another verdict into this one.
    ///
    /// Used to layer jurisdiction findings on top of the federal verdict:
    /// lists are appended, never replaced, and `is_compliant` is re-derived
    /// from the combined violation list.
    pub fn merge(mut self, other: ComplianceValidation) -> Self {
        self.violations.extend(other.violations);
        self.warnings.extend(other.warnings);
        self.recommendations.extend(other.recommendations);
        self.is_compliant = self.violations.is_empty();
        self
    }
}

impl Default for ComplianceValidation {
    fn default() -> Self {
        Self::compliant()
    }
}

/// Estimated fine exposure, a function only of violation count.
/// Amounts are whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FineEstimate {
    pub min_fine: u64,
    pub max_fine: u64,
    pub daily_fine: u64,
}
