use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Where a precipitation measurement came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingSource {
    PrimaryProvider,
    FallbackProvider,
    Manual,
}

/// A precipitation measurement for a construction site.
///
/// Immutable once recorded: a reading is never mutated, only superseded by a
/// new reading for a later timestamp. Timestamps are local site wall-clock
/// time, which is what the permit's inspection window operates in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecipitationReading {
    pub amount_inches: f64,
    pub observed_at: NaiveDateTime,
    pub source: ReadingSource,
}
