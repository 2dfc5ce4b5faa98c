//! Message types for the LiftLog backup record tree.
//!
//! These mirror the DAO schema the app serializes into its
//! `.liftlogbackup.gz` container. The structs are hand-written prost
//! messages; field tags follow the upstream schema ordering and must not
//! be renumbered, or existing consumers will misread the payload.

use std::collections::HashMap;

/// Top-level backup container payload.
///
/// Holds the full session history plus the saved-program table. Exactly one
/// program is expected to be referenced by `active_program_id` after an
/// import, otherwise the history is orphaned in the app UI.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportedDataDaoV2 {
    #[prost(message, repeated, tag = "1")]
    pub sessions: Vec<SessionDaoV2>,
    #[prost(map = "string, message", tag = "2")]
    pub saved_programs: HashMap<String, ProgramBlueprintDaoV1>,
    /// Wrapper-encoded so "no active program" is wire-level absence.
    #[prost(message, optional, tag = "3")]
    pub active_program_id: Option<String>,
}

/// One completed training session.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SessionDaoV2 {
    #[prost(message, optional, tag = "1")]
    pub id: Option<UuidDao>,
    #[prost(string, tag = "2")]
    pub session_name: String,
    #[prost(string, tag = "3")]
    pub blueprint_notes: String,
    #[prost(message, optional, tag = "4")]
    pub date: Option<DateOnlyDao>,
    #[prost(message, repeated, tag = "5")]
    pub recorded_exercises: Vec<RecordedExerciseDaoV2>,
}

/// One exercise performed within a session.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordedExerciseDaoV2 {
    #[prost(message, optional, tag = "1")]
    pub exercise_blueprint: Option<ExerciseBlueprintDaoV2>,
    #[prost(enumeration = "ExerciseTypeDao", tag = "2")]
    pub exercise_type: i32,
    #[prost(message, repeated, tag = "3")]
    pub potential_sets: Vec<PotentialSetDaoV2>,
    /// Absent when the exercise carries no notes. Never an empty wrapper.
    #[prost(message, optional, tag = "4")]
    pub notes: Option<String>,
}

/// A planned set slot, wrapping the recorded performance when completed.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PotentialSetDaoV2 {
    #[prost(message, optional, tag = "1")]
    pub weight_value: Option<DecimalValue>,
    #[prost(enumeration = "WeightUnitDao", tag = "2")]
    pub weight_unit: i32,
    #[prost(message, optional, tag = "3")]
    pub recorded_set: Option<RecordedSetDaoV2>,
}

/// The recorded performance of a completed set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordedSetDaoV2 {
    #[prost(int32, tag = "1")]
    pub reps_completed: i32,
    #[prost(message, optional, tag = "2")]
    pub completion_date: Option<DateOnlyDao>,
    #[prost(message, optional, tag = "3")]
    pub completion_time: Option<TimeOnlyDao>,
}

/// Reusable program template grouping session blueprints.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProgramBlueprintDaoV1 {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub sessions: Vec<SessionBlueprintDaoV2>,
    #[prost(message, optional, tag = "3")]
    pub last_edited: Option<DateOnlyDao>,
}

/// Template for one session within a program.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SessionBlueprintDaoV2 {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub exercise_blueprints: Vec<ExerciseBlueprintDaoV2>,
}

/// Template for one exercise: target sets/reps and progression hints.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExerciseBlueprintDaoV2 {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub sets: i32,
    #[prost(int32, tag = "3")]
    pub reps_per_set: i32,
    #[prost(enumeration = "ExerciseTypeDao", tag = "4")]
    pub exercise_type: i32,
    #[prost(message, optional, tag = "5")]
    pub weight_increase_on_success: Option<DecimalValue>,
    #[prost(message, optional, tag = "6")]
    pub rest_between_sets: Option<RestDaoV2>,
}

/// Rest-duration hints between sets.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RestDaoV2 {
    #[prost(message, optional, tag = "1")]
    pub min_rest: Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "2")]
    pub max_rest: Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "3")]
    pub failure_rest: Option<::prost_types::Duration>,
}

impl RestDaoV2 {
    /// Whole-second rest hints, min / max / after-failure.
    pub fn from_seconds(min: i64, max: i64, failure: i64) -> Self {
        let secs = |seconds| ::prost_types::Duration { seconds, nanos: 0 };
        Self {
            min_rest: Some(secs(min)),
            max_rest: Some(secs(max)),
            failure_rest: Some(secs(failure)),
        }
    }
}

/// A 128-bit identifier as 16 raw bytes.
///
/// Byte order depends on the configured [`GuidLayout`](crate::GuidLayout);
/// see the `guid` module.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UuidDao {
    #[prost(bytes = "vec", tag = "1")]
    pub value: Vec<u8>,
}

/// Calendar date without a time component.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DateOnlyDao {
    #[prost(int32, tag = "1")]
    pub year: i32,
    #[prost(int32, tag = "2")]
    pub month: i32,
    #[prost(int32, tag = "3")]
    pub day: i32,
}

/// Time of day without a date component.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct TimeOnlyDao {
    #[prost(int32, tag = "1")]
    pub hour: i32,
    #[prost(int32, tag = "2")]
    pub minute: i32,
    #[prost(int32, tag = "3")]
    pub second: i32,
    #[prost(int32, tag = "4")]
    pub millisecond: i32,
    #[prost(int32, tag = "5")]
    pub microsecond: i32,
}

/// Fixed-point decimal: whole `units` plus `nanos` in 10^-9 steps.
///
/// Invariant: `nanos` is always in `[0, 1_000_000_000)`; the fractional
/// part never encodes a sign of its own.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DecimalValue {
    #[prost(int64, tag = "1")]
    pub units: i64,
    #[prost(sfixed32, tag = "2")]
    pub nanos: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ExerciseTypeDao {
    Weighted = 0,
    Bodyweight = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WeightUnitDao {
    Unspecified = 0,
    Kilograms = 1,
    Pounds = 2,
}
