//! Tabular parser: groups flat export rows into an ordered
//! workout / exercise / set hierarchy.

use std::collections::HashMap;
use std::io::Read;

use chrono::NaiveDateTime;

use crate::error::{ConvertError, ConvertResult};
use crate::row::{ExportRow, SetMarker};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DEFAULT_TITLE: &str = "Workout";

/// One working set. Warmups, rest timers, and note rows never get here.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedSet {
    pub weight_kg: f64,
    pub reps: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedExercise {
    pub name: String,
    /// Newline-joined note rows; empty when the exercise has none.
    pub notes: String,
    /// Source row order, append-only.
    pub sets: Vec<ParsedSet>,
}

/// One exported workout session.
///
/// The source workout identifier is consumed during grouping and not kept.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedWorkout {
    pub started_at: NaiveDateTime,
    pub title: String,
    /// Captured but unused downstream; the target model has no session
    /// duration field.
    pub duration_secs: u32,
    pub notes: String,
    /// First-seen order; names are unique within a workout.
    pub exercises: Vec<ParsedExercise>,
}

/// Per-workout accumulation state. The side tables exist only while
/// parsing and are dropped when the workout is finalized.
struct WorkoutAccumulator {
    workout: ParsedWorkout,
    exercise_index: HashMap<String, usize>,
    pending_notes: HashMap<String, String>,
}

impl WorkoutAccumulator {
    fn from_first_row(row: &ExportRow) -> ConvertResult<Self> {
        let started_at =
            NaiveDateTime::parse_from_str(&row.date, DATE_FORMAT).map_err(|_| {
                ConvertError::Timestamp {
                    workout: row.workout_id.clone(),
                    value: row.date.clone(),
                }
            })?;

        let title = if row.workout_name.is_empty() {
            DEFAULT_TITLE.to_owned()
        } else {
            row.workout_name.clone()
        };

        Ok(Self {
            workout: ParsedWorkout {
                started_at,
                title,
                duration_secs: parse_u32(row.duration_sec.as_deref()),
                notes: row.workout_notes.clone().unwrap_or_default(),
                exercises: Vec::new(),
            },
            exercise_index: HashMap::new(),
            pending_notes: HashMap::new(),
        })
    }

    fn attach_note(&mut self, exercise_name: &str, note: &str) {
        match self.exercise_index.get(exercise_name) {
            Some(&idx) => {
                let notes = &mut self.workout.exercises[idx].notes;
                if !notes.is_empty() {
                    notes.push('\n');
                }
                notes.push_str(note);
            }
            // Note row before the exercise's first set; keep the latest
            // until a working set materializes the exercise entry.
            None => {
                self.pending_notes
                    .insert(exercise_name.to_owned(), note.to_owned());
            }
        }
    }

    fn push_set(&mut self, exercise_name: &str, set: ParsedSet) {
        let idx = match self.exercise_index.get(exercise_name) {
            Some(&idx) => idx,
            None => {
                let notes = self.pending_notes.remove(exercise_name).unwrap_or_default();
                self.workout.exercises.push(ParsedExercise {
                    name: exercise_name.to_owned(),
                    notes,
                    sets: Vec::new(),
                });
                let idx = self.workout.exercises.len() - 1;
                self.exercise_index.insert(exercise_name.to_owned(), idx);
                idx
            }
        };
        self.workout.exercises[idx].sets.push(set);
    }
}

/// Parse a semicolon-delimited export into workouts in first-seen order.
///
/// Malformed weight/reps cells degrade to zero; an unparsable workout
/// start timestamp is fatal for the run.
pub fn parse_export<R: Read>(input: R) -> ConvertResult<Vec<ParsedWorkout>> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(input);

    let mut workouts: Vec<WorkoutAccumulator> = Vec::new();
    let mut workout_index: HashMap<String, usize> = HashMap::new();

    for record in reader.deserialize() {
        let row: ExportRow = record?;

        let acc = match workout_index.get(&row.workout_id) {
            Some(&idx) => &mut workouts[idx],
            None => {
                workouts.push(WorkoutAccumulator::from_first_row(&row)?);
                let idx = workouts.len() - 1;
                workout_index.insert(row.workout_id.clone(), idx);
                &mut workouts[idx]
            }
        };

        match SetMarker::classify(&row.set_order) {
            SetMarker::Note => {
                let note = row.notes.as_deref().unwrap_or_default();
                if !note.is_empty() {
                    acc.attach_note(&row.exercise_name, note);
                }
            }
            SetMarker::Warmup | SetMarker::RestTimer => {}
            SetMarker::Other => {
                tracing::trace!(
                    marker = %row.set_order,
                    exercise = %row.exercise_name,
                    "skipping row with unrecognized set marker"
                );
            }
            SetMarker::Working(_) => {
                acc.push_set(
                    &row.exercise_name,
                    ParsedSet {
                        weight_kg: parse_f64(row.weight_kg.as_deref()),
                        reps: parse_u32(row.reps.as_deref()),
                    },
                );
            }
        }
    }

    tracing::debug!(workouts = workouts.len(), "parsed export");
    Ok(workouts.into_iter().map(|acc| acc.workout).collect())
}

fn parse_f64(cell: Option<&str>) -> f64 {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// The export writes integers as decimals ("5.0"); parse as float and
/// truncate. Negative or malformed values collapse to zero.
fn parse_u32(cell: Option<&str>) -> u32 {
    parse_f64(cell) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> Vec<ParsedWorkout> {
        parse_export(csv.as_bytes()).expect("parse")
    }

    const HEADER: &str = "Workout #;Date;Workout Name;Duration (sec);Exercise Name;Set Order;Weight (kg);Reps;Notes;Workout Notes;RPE\n";

    fn export(rows: &[&str]) -> String {
        let mut s = HEADER.to_owned();
        for row in rows {
            s.push_str(row);
            s.push('\n');
        }
        s
    }

    #[test]
    fn groups_rows_by_workout_in_first_seen_order() {
        let data = export(&[
            "2;2024-05-02 17:00:00;Pull;3600;Row;1;60;8;;;",
            "1;2024-05-01 17:00:00;Push;3600;Bench;1;80;5;;;",
            "2;2024-05-02 17:00:00;Pull;3600;Row;2;60;8;;;",
        ]);
        let workouts = parse(&data);
        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[0].title, "Pull");
        assert_eq!(workouts[1].title, "Push");
        assert_eq!(workouts[0].exercises[0].sets.len(), 2);
    }

    #[test]
    fn workout_fields_come_from_the_first_row_only() {
        let data = export(&[
            "1;2024-05-01 17:00:00;Push;3600;Bench;1;80;5;;first note;",
            "1;2024-05-01 18:30:00;Renamed;99;Bench;2;80;5;;other note;",
        ]);
        let workouts = parse(&data);
        assert_eq!(workouts.len(), 1);
        let w = &workouts[0];
        assert_eq!(w.title, "Push");
        assert_eq!(w.duration_secs, 3600);
        assert_eq!(w.notes, "first note");
        assert_eq!(
            w.started_at,
            NaiveDateTime::parse_from_str("2024-05-01 17:00:00", DATE_FORMAT).expect("dt")
        );
    }

    #[test]
    fn warmup_and_rest_timer_rows_produce_no_sets() {
        let data = export(&[
            "1;2024-05-01 17:00:00;Push;3600;Bench;W;20;10;;;",
            "1;2024-05-01 17:00:00;Push;3600;Bench;1;60;5;;;",
            "1;2024-05-01 17:00:00;Push;3600;Bench;Rest Timer;;;;;",
        ]);
        let workouts = parse(&data);
        let sets = &workouts[0].exercises[0].sets;
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].reps, 5);
        assert_eq!(sets[0].weight_kg, 60.0);
    }

    #[test]
    fn unrecognized_markers_are_skipped() {
        let data = export(&[
            "1;2024-05-01 17:00:00;Push;3600;Bench;D;60;5;;;",
            "1;2024-05-01 17:00:00;Push;3600;Bench;1;60;5;;;",
        ]);
        let workouts = parse(&data);
        assert_eq!(workouts[0].exercises[0].sets.len(), 1);
    }

    #[test]
    fn a_warmup_only_workout_still_groups_but_holds_no_exercises() {
        let data = export(&["1;2024-05-01 17:00:00;Push;3600;Bench;W;20;10;;;"]);
        let workouts = parse(&data);
        assert_eq!(workouts.len(), 1);
        assert!(workouts[0].exercises.is_empty());
    }

    #[test]
    fn note_rows_append_to_existing_exercise_notes() {
        let data = export(&[
            "1;2024-05-01 17:00:00;Push;3600;Bench;1;60;5;;;",
            "1;2024-05-01 17:00:00;Push;3600;Bench;Note;;;felt heavy;;",
            "1;2024-05-01 17:00:00;Push;3600;Bench;Note;;;grip slipped;;",
        ]);
        let workouts = parse(&data);
        assert_eq!(workouts[0].exercises[0].notes, "felt heavy\ngrip slipped");
    }

    #[test]
    fn note_before_first_set_is_buffered_until_the_set_arrives() {
        let data = export(&[
            "1;2024-05-01 17:00:00;Push;3600;Bench;Note;;;warm shoulders first;;",
            "1;2024-05-01 17:00:00;Push;3600;Bench;1;60;5;;;",
        ]);
        let workouts = parse(&data);
        assert_eq!(workouts[0].exercises[0].notes, "warm shoulders first");
    }

    #[test]
    fn buffered_note_for_an_exercise_that_never_sets_is_dropped() {
        let data = export(&[
            "1;2024-05-01 17:00:00;Push;3600;Stretching;Note;;;skipped;;",
            "1;2024-05-01 17:00:00;Push;3600;Bench;1;60;5;;;",
        ]);
        let workouts = parse(&data);
        assert_eq!(workouts[0].exercises.len(), 1);
        assert_eq!(workouts[0].exercises[0].name, "Bench");
        assert!(workouts[0].exercises[0].notes.is_empty());
    }

    #[test]
    fn malformed_numbers_degrade_to_zero() {
        let data = export(&[
            "1;2024-05-01 17:00:00;Push;oops;Bench;1;heavy;some;;;",
            "1;2024-05-01 17:00:00;Push;oops;Bench;2;;;;;",
        ]);
        let workouts = parse(&data);
        let w = &workouts[0];
        assert_eq!(w.duration_secs, 0);
        assert_eq!(w.exercises[0].sets[0], ParsedSet { weight_kg: 0.0, reps: 0 });
        assert_eq!(w.exercises[0].sets[1], ParsedSet { weight_kg: 0.0, reps: 0 });
    }

    #[test]
    fn decimal_reps_truncate() {
        let data = export(&["1;2024-05-01 17:00:00;Push;0;Bench;1;60.5;5.0;;;"]);
        let workouts = parse(&data);
        let set = &workouts[0].exercises[0].sets[0];
        assert_eq!(set.weight_kg, 60.5);
        assert_eq!(set.reps, 5);
    }

    #[test]
    fn empty_workout_name_gets_placeholder() {
        let data = export(&["1;2024-05-01 17:00:00;;0;Bench;1;60;5;;;"]);
        assert_eq!(parse(&data)[0].title, "Workout");
    }

    #[test]
    fn bad_timestamp_is_fatal() {
        let data = export(&["1;yesterday evening;Push;0;Bench;1;60;5;;;"]);
        let err = parse_export(data.as_bytes()).expect_err("must fail");
        assert!(matches!(err, ConvertError::Timestamp { .. }));
    }

    #[test]
    fn exercises_keep_first_seen_order() {
        let data = export(&[
            "1;2024-05-01 17:00:00;Push;0;Bench;1;60;5;;;",
            "1;2024-05-01 17:00:00;Push;0;Dips;1;0;12;;;",
            "1;2024-05-01 17:00:00;Push;0;Bench;2;60;5;;;",
        ]);
        let names: Vec<_> = parse(&data)[0]
            .exercises
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(names, ["Bench", "Dips"]);
        assert_eq!(parse(&data)[0].exercises[0].sets.len(), 2);
    }
}
