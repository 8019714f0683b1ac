use pretty_assertions::assert_eq;
use shared_types::{AppConfig, AttendanceBand, ClassStatus, ConfigErrorKind, VerificationTiming};

#[test]
fn embedded_timing_matches_the_documented_scan() {
    let config = AppConfig::embedded().unwrap();
    let timing = config.verification;

    assert_eq!(timing, VerificationTiming::default());
    assert_eq!(timing.ticks_to_complete(), 20);
    assert_eq!(timing.tick().as_millis(), 100);
    assert_eq!(timing.completion_delay().as_millis(), 1500);
}

#[test]
fn student_current_class_is_the_teachers_active_class() {
    let config = AppConfig::embedded().unwrap();
    let teacher = &config.fixtures.teacher;
    let student = &config.fixtures.student;

    let active = teacher.active_class().unwrap();
    assert_eq!(active.name, student.current_class.name);
    assert_eq!(active.room, student.current_class.room);
    assert_eq!(student.current_class.teacher, teacher.name);
    assert!(student.current_class.is_active);
    assert!(!student.current_class.has_marked);
}

#[test]
fn embedded_subject_bands() {
    let config = AppConfig::embedded().unwrap();
    let bands: Vec<_> = config
        .fixtures
        .student
        .subjects
        .iter()
        .map(|s| (s.percentage(), s.band()))
        .collect();

    assert_eq!(
        bands,
        vec![
            (87.5, AttendanceBand::Good),
            (86.7, AttendanceBand::Good),
            (82.8, AttendanceBand::Warning),
            (78.6, AttendanceBand::Warning),
            (76.9, AttendanceBand::Warning),
        ]
    );
}

#[test]
fn embedded_class_rates() {
    let config = AppConfig::embedded().unwrap();
    let rates: Vec<_> = config
        .fixtures
        .teacher
        .classes
        .iter()
        .map(|c| (c.status, c.attendance_rate()))
        .collect();

    assert_eq!(
        rates,
        vec![
            (ClassStatus::Completed, 93),
            (ClassStatus::Active, 92),
            (ClassStatus::Upcoming, 0),
        ]
    );
}

#[test]
fn out_of_range_fixture_is_rejected() {
    let err = AppConfig::from_toml_str(
        r#"
        [[fixtures.admin.departments]]
        name = "Physics"
        students = 10
        attendance = 120.0
        "#,
    )
    .unwrap_err();
    assert_eq!(err.kind, ConfigErrorKind::InvalidFixture);
    assert!(err.message.contains("Physics"));
}

#[test]
fn subject_with_more_present_than_total_is_rejected() {
    let err = AppConfig::from_toml_str(
        r#"
        [[fixtures.student.subjects]]
        subject = "Networks"
        present = 30
        total = 26
        "#,
    )
    .unwrap_err();
    assert_eq!(err.kind, ConfigErrorKind::InvalidFixture);
}

#[test]
fn zero_tick_is_rejected() {
    let err = AppConfig::from_toml_str("[verification]\ntick_ms = 0\n").unwrap_err();
    assert_eq!(err.kind, ConfigErrorKind::InvalidTiming);
}
