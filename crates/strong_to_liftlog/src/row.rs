//! Row model for the Strong CSV export.
//!
//! One struct covers every column the export variants carry. Numeric-ish
//! cells stay as raw strings here; permissive interpretation happens in
//! the parser so a malformed cell degrades to a default instead of
//! failing row deserialization.

use serde::Deserialize;

/// One row of the semicolon-delimited export.
#[derive(Clone, Debug, Deserialize)]
pub struct ExportRow {
    /// Source workout identifier; only used for grouping.
    #[serde(rename = "Workout #")]
    pub workout_id: String,

    /// Workout start, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Workout Name")]
    pub workout_name: String,

    #[serde(rename = "Duration (sec)", default)]
    pub duration_sec: Option<String>,

    #[serde(rename = "Workout Notes", default)]
    pub workout_notes: Option<String>,

    #[serde(rename = "Exercise Name")]
    pub exercise_name: String,

    /// Working-set ordinal, or one of the `W` / `Rest Timer` / `Note` tags.
    #[serde(rename = "Set Order")]
    pub set_order: String,

    #[serde(rename = "Weight (kg)", default)]
    pub weight_kg: Option<String>,

    #[serde(rename = "Reps", default)]
    pub reps: Option<String>,

    /// Per-set or note text, depending on the marker.
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,

    // Columns below are read for forward compatibility with both export
    // variants but carry nothing the target model records.
    #[serde(rename = "RPE", default)]
    pub rpe: Option<String>,

    #[serde(rename = "Distance (meters)", default)]
    pub distance_meters: Option<String>,

    #[serde(rename = "Seconds", default)]
    pub seconds: Option<String>,
}

/// Classification of the `Set Order` cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetMarker {
    /// A working set with its ordinal.
    Working(u32),
    /// Warmup set, excluded from the output.
    Warmup,
    /// Rest-timer bookkeeping row, excluded.
    RestTimer,
    /// Exercise-note row; text attaches to the exercise, no set.
    Note,
    /// Anything else; skipped defensively.
    Other,
}

impl SetMarker {
    pub fn classify(raw: &str) -> Self {
        match raw.trim() {
            "Note" => Self::Note,
            "W" => Self::Warmup,
            "Rest Timer" => Self::RestTimer,
            s => s.parse::<u32>().map_or(Self::Other, Self::Working),
        }
    }
}
