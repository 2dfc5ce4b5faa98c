//! Record builder: maps parsed workouts into the backup record tree.

use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use liftlog_backup::{
    DateOnlyDao, DecimalValue, ExerciseBlueprintDaoV2, ExerciseTypeDao, ExportedDataDaoV2,
    GuidLayout, PotentialSetDaoV2, ProgramBlueprintDaoV1, RecordedExerciseDaoV2, RecordedSetDaoV2,
    RestDaoV2, SessionBlueprintDaoV2, SessionDaoV2, TimeOnlyDao, UuidDao, WeightUnitDao,
};

use crate::parser::{ParsedExercise, ParsedSet, ParsedWorkout};

/// Placeholder values for the synthetic program template. None of these
/// are derived from source data; they exist so the app has a usable
/// active program after import.
pub mod defaults {
    pub const PROGRAM_NAME: &str = "Imported from Strong";
    pub const FALLBACK_SETS: i32 = 3;
    pub const FALLBACK_REPS: i32 = 5;
    pub const WEIGHT_INCREASE_KG: f64 = 2.5;
    pub const MIN_REST_SECS: i64 = 90;
    pub const MAX_REST_SECS: i64 = 180;
    pub const FAILURE_REST_SECS: i64 = 300;
}

/// Tuning knobs for the conversion. Both cover divergences between
/// observed export consumers; see DESIGN.md.
#[derive(Clone, Copy, Debug)]
pub struct ConvertOptions {
    /// Byte layout for generated identifiers.
    pub guid_layout: GuidLayout,
    /// Seconds between synthesized per-set completion times.
    pub set_interval_secs: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            guid_layout: GuidLayout::default(),
            set_interval_secs: 60,
        }
    }
}

/// Build the complete backup tree from parsed workouts.
///
/// Workouts without exercises produce no session. `today` stamps the
/// synthetic program's last-edited date; it is a parameter so builds are
/// reproducible under test.
pub fn build_backup(
    workouts: &[ParsedWorkout],
    opts: &ConvertOptions,
    today: NaiveDate,
) -> ExportedDataDaoV2 {
    let mut backup = ExportedDataDaoV2::default();

    for workout in workouts {
        if workout.exercises.is_empty() {
            tracing::debug!(title = %workout.title, "skipping workout without working sets");
            continue;
        }
        backup.sessions.push(build_session(workout, opts));
    }

    let program_id = Uuid::new_v4().to_string();
    backup
        .saved_programs
        .insert(program_id.clone(), build_program(workouts, today));
    backup.active_program_id = Some(program_id);

    tracing::debug!(sessions = backup.sessions.len(), "built backup tree");
    backup
}

fn build_session(workout: &ParsedWorkout, opts: &ConvertOptions) -> SessionDaoV2 {
    let mut session = SessionDaoV2 {
        id: Some(UuidDao::random(opts.guid_layout)),
        session_name: workout.title.clone(),
        blueprint_notes: workout.notes.clone(),
        date: Some(DateOnlyDao::from_date(workout.started_at.date())),
        recorded_exercises: Vec::new(),
    };

    // The set index keeps counting across exercises so synthesized
    // completion times stay ordered through the whole session.
    let mut cumulative_sets = 0usize;
    for exercise in &workout.exercises {
        session
            .recorded_exercises
            .push(build_recorded_exercise(exercise, workout, cumulative_sets, opts));
        cumulative_sets += exercise.sets.len();
    }

    session
}

fn build_recorded_exercise(
    exercise: &ParsedExercise,
    workout: &ParsedWorkout,
    set_offset: usize,
    opts: &ConvertOptions,
) -> RecordedExerciseDaoV2 {
    // The target template assumes uniform reps per set; the first set's
    // count stands in for the whole exercise.
    let reps_first = exercise.sets.first().map_or(0, |s| s.reps);

    RecordedExerciseDaoV2 {
        exercise_blueprint: Some(ExerciseBlueprintDaoV2 {
            name: exercise.name.clone(),
            sets: exercise.sets.len() as i32,
            reps_per_set: reps_first as i32,
            exercise_type: ExerciseTypeDao::Weighted as i32,
            weight_increase_on_success: None,
            rest_between_sets: None,
        }),
        exercise_type: ExerciseTypeDao::Weighted as i32,
        potential_sets: exercise
            .sets
            .iter()
            .enumerate()
            .map(|(i, set)| build_potential_set(set, workout, set_offset + i, opts))
            .collect(),
        notes: (!exercise.notes.is_empty()).then(|| exercise.notes.clone()),
    }
}

fn build_potential_set(
    set: &ParsedSet,
    workout: &ParsedWorkout,
    set_index: usize,
    opts: &ConvertOptions,
) -> PotentialSetDaoV2 {
    // The source records one timestamp per workout; per-set times are
    // synthesized at a fixed interval to preserve relative ordering.
    let offset_secs = i64::from(opts.set_interval_secs) * set_index as i64;

    PotentialSetDaoV2 {
        weight_value: Some(DecimalValue::from_f64(set.weight_kg)),
        weight_unit: WeightUnitDao::Kilograms as i32,
        recorded_set: Some(RecordedSetDaoV2 {
            reps_completed: set.reps as i32,
            completion_date: Some(DateOnlyDao::from_date(workout.started_at.date())),
            completion_time: Some(TimeOnlyDao::from_time_offset(
                workout.started_at.time(),
                offset_secs,
            )),
        }),
    }
}

/// Derive the synthetic program template: one session blueprint per
/// distinct workout title, each with one exercise blueprint per distinct
/// exercise name in the first workout bearing that title.
fn build_program(workouts: &[ParsedWorkout], today: NaiveDate) -> ProgramBlueprintDaoV1 {
    let mut program = ProgramBlueprintDaoV1 {
        name: defaults::PROGRAM_NAME.to_owned(),
        sessions: Vec::new(),
        last_edited: Some(DateOnlyDao::from_date(today)),
    };

    let mut seen_titles = HashSet::new();
    for workout in workouts {
        if !seen_titles.insert(workout.title.as_str()) {
            continue;
        }

        let mut session_bp = SessionBlueprintDaoV2 {
            name: workout.title.clone(),
            exercise_blueprints: Vec::new(),
        };

        let mut seen_exercises = HashSet::new();
        for exercise in &workout.exercises {
            if !seen_exercises.insert(exercise.name.as_str()) {
                continue;
            }
            session_bp
                .exercise_blueprints
                .push(build_exercise_blueprint(exercise));
        }

        program.sessions.push(session_bp);
    }

    program
}

fn build_exercise_blueprint(exercise: &ParsedExercise) -> ExerciseBlueprintDaoV2 {
    let sets = if exercise.sets.is_empty() {
        defaults::FALLBACK_SETS
    } else {
        exercise.sets.len() as i32
    };
    let reps_per_set = exercise
        .sets
        .first()
        .map_or(defaults::FALLBACK_REPS, |s| s.reps as i32);

    ExerciseBlueprintDaoV2 {
        name: exercise.name.clone(),
        sets,
        reps_per_set,
        exercise_type: ExerciseTypeDao::Weighted as i32,
        weight_increase_on_success: Some(DecimalValue::from_f64(defaults::WEIGHT_INCREASE_KG)),
        rest_between_sets: Some(RestDaoV2::from_seconds(
            defaults::MIN_REST_SECS,
            defaults::MAX_REST_SECS,
            defaults::FAILURE_REST_SECS,
        )),
    }
}
