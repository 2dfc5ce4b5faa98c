use liftlog_backup::{
    DateOnlyDao, DecimalValue, ExerciseBlueprintDaoV2, ExerciseTypeDao, ExportedDataDaoV2,
    GuidLayout, PotentialSetDaoV2, ProgramBlueprintDaoV1, RecordedExerciseDaoV2, RecordedSetDaoV2,
    SessionBlueprintDaoV2, SessionDaoV2, TimeOnlyDao, UuidDao, WeightUnitDao, read_backup,
    write_backup,
};

fn sample_backup() -> ExportedDataDaoV2 {
    let set = PotentialSetDaoV2 {
        weight_value: Some(DecimalValue::from_f64(82.5)),
        weight_unit: WeightUnitDao::Kilograms as i32,
        recorded_set: Some(RecordedSetDaoV2 {
            reps_completed: 5,
            completion_date: Some(DateOnlyDao {
                year: 2024,
                month: 6,
                day: 3,
            }),
            completion_time: Some(TimeOnlyDao {
                hour: 18,
                minute: 31,
                second: 0,
                millisecond: 0,
                microsecond: 0,
            }),
        }),
    };

    let exercise = RecordedExerciseDaoV2 {
        exercise_blueprint: Some(ExerciseBlueprintDaoV2 {
            name: "Deadlift".into(),
            sets: 1,
            reps_per_set: 5,
            exercise_type: ExerciseTypeDao::Weighted as i32,
            weight_increase_on_success: None,
            rest_between_sets: None,
        }),
        exercise_type: ExerciseTypeDao::Weighted as i32,
        potential_sets: vec![set],
        notes: Some("belt on".into()),
    };

    let session = SessionDaoV2 {
        id: Some(UuidDao::random(GuidLayout::DotNet)),
        session_name: "Pull Day".into(),
        blueprint_notes: String::new(),
        date: Some(DateOnlyDao {
            year: 2024,
            month: 6,
            day: 3,
        }),
        recorded_exercises: vec![exercise],
    };

    let mut backup = ExportedDataDaoV2 {
        sessions: vec![session],
        ..Default::default()
    };
    backup.saved_programs.insert(
        "11111111-2222-3333-4444-555555555555".into(),
        ProgramBlueprintDaoV1 {
            name: "Imported".into(),
            sessions: vec![SessionBlueprintDaoV2 {
                name: "Pull Day".into(),
                exercise_blueprints: vec![],
            }],
            last_edited: Some(DateOnlyDao {
                year: 2024,
                month: 6,
                day: 4,
            }),
        },
    );
    backup.active_program_id = Some("11111111-2222-3333-4444-555555555555".into());
    backup
}

#[test]
fn write_then_read_reproduces_the_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history.liftlogbackup.gz");

    let backup = sample_backup();
    let sizes = write_backup(&backup, &path).expect("write");
    assert!(sizes.encoded > 0);
    assert!(sizes.compressed > 0);

    let restored = read_backup(&path).expect("read");
    assert_eq!(restored, backup);
}

#[test]
fn optional_fields_survive_as_absent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bare.liftlogbackup.gz");

    let mut backup = sample_backup();
    backup.sessions[0].recorded_exercises[0].notes = None;
    backup.active_program_id = None;

    write_backup(&backup, &path).expect("write");
    let restored = read_backup(&path).expect("read");
    assert!(restored.sessions[0].recorded_exercises[0].notes.is_none());
    assert!(restored.active_program_id.is_none());
}

#[test]
fn read_rejects_non_gzip_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("garbage.bin");
    std::fs::write(&path, b"definitely not a gzip stream").expect("write");
    assert!(read_backup(&path).is_err());
}
