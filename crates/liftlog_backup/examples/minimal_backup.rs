//! Build a one-session backup tree and write it next to the binary.
//!
//! Run with: `cargo run --example minimal_backup`

use std::path::Path;

use liftlog_backup::{
    DateOnlyDao, DecimalValue, ExerciseBlueprintDaoV2, ExerciseTypeDao, ExportedDataDaoV2,
    GuidLayout, PotentialSetDaoV2, RecordedExerciseDaoV2, RecordedSetDaoV2, SessionDaoV2,
    TimeOnlyDao, UuidDao, WeightUnitDao, write_backup,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = SessionDaoV2 {
        id: Some(UuidDao::random(GuidLayout::DotNet)),
        session_name: "Example Day".into(),
        blueprint_notes: String::new(),
        date: Some(DateOnlyDao {
            year: 2024,
            month: 1,
            day: 15,
        }),
        recorded_exercises: vec![RecordedExerciseDaoV2 {
            exercise_blueprint: Some(ExerciseBlueprintDaoV2 {
                name: "Squat".into(),
                sets: 1,
                reps_per_set: 5,
                exercise_type: ExerciseTypeDao::Weighted as i32,
                weight_increase_on_success: None,
                rest_between_sets: None,
            }),
            exercise_type: ExerciseTypeDao::Weighted as i32,
            potential_sets: vec![PotentialSetDaoV2 {
                weight_value: Some(DecimalValue::from_f64(100.0)),
                weight_unit: WeightUnitDao::Kilograms as i32,
                recorded_set: Some(RecordedSetDaoV2 {
                    reps_completed: 5,
                    completion_date: Some(DateOnlyDao {
                        year: 2024,
                        month: 1,
                        day: 15,
                    }),
                    completion_time: Some(TimeOnlyDao {
                        hour: 9,
                        minute: 30,
                        second: 0,
                        millisecond: 0,
                        microsecond: 0,
                    }),
                }),
            }],
            notes: None,
        }],
    };

    let backup = ExportedDataDaoV2 {
        sessions: vec![session],
        ..Default::default()
    };

    let path = Path::new("example.liftlogbackup.gz");
    let sizes = write_backup(&backup, path)?;
    println!(
        "wrote {} ({} bytes payload, {} bytes compressed)",
        path.display(),
        sizes.encoded,
        sizes.compressed
    );
    Ok(())
}
