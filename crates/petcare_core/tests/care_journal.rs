use chrono::NaiveDate;
use petcare_core::{export_pet_report, CareConfig, CareJournal, JournalError, Pet};
use std::fs;
use std::path::Path;

#[test]
fn journal_appends_one_line_per_event() {
    let dir = tempfile::tempdir().unwrap();
    let journal = CareJournal::new(dir.path().join("care_log.txt")).unwrap();
    let at = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();

    journal.record_at(at, "Suki", "feeding", "Purina Pro").unwrap();
    journal.record_at(at, "Suki", "walk", "30 minutes").unwrap();

    let content = fs::read_to_string(journal.path()).unwrap();
    assert_eq!(
        content,
        "2024-05-01 08:30 - Suki - feeding: Purina Pro\n\
         2024-05-01 08:30 - Suki - walk: 30 minutes\n"
    );
}

#[test]
fn pet_log_event_delegates_to_journal() {
    let dir = tempfile::tempdir().unwrap();
    let journal = CareJournal::new(dir.path().join("care_log.txt")).unwrap();
    let pet = Pet::dog("Suki", "Pomsky", 13.6, 1.5).unwrap();

    pet.log_event(&journal, "vet", "annual checkup").unwrap();

    let content = fs::read_to_string(journal.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" - Suki - vet: annual checkup"));
    assert!(content.ends_with('\n'));
}

#[test]
fn journal_rejects_empty_path() {
    let err = CareJournal::new("").unwrap_err();
    assert!(matches!(err, JournalError::InvalidPath(_)));
}

#[test]
fn journal_write_failure_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let journal = CareJournal::new(dir.path().join("missing").join("care_log.txt")).unwrap();
    let err = journal.record("Suki", "feeding", "none").unwrap_err();
    assert!(matches!(err, JournalError::Io(_)));
}

#[test]
fn report_writes_one_line_per_pet_and_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pet_report.txt");
    fs::write(&path, "stale content\n").unwrap();

    let pets = [
        Pet::dog("Suki", "Pomsky", 13.6, 1.5).unwrap(),
        Pet::cat("Luna", "Tabby", 4.0, 3.0).unwrap(),
    ];
    let written = export_pet_report(&path, &pets).unwrap();

    assert_eq!(written, 2);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Suki, Age: 1.5, Weight: 13.6\nLuna, Age: 3, Weight: 4\n"
    );
}

#[test]
fn report_rejects_empty_path() {
    let pets: Vec<Pet> = Vec::new();
    let err = export_pet_report(Path::new(""), &pets).unwrap_err();
    assert!(matches!(err, JournalError::InvalidPath(_)));
}

#[test]
fn config_builds_journal_at_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = CareConfig::under(dir.path());
    config.validate().unwrap();

    let journal = config.journal().unwrap();
    assert_eq!(journal.path(), dir.path().join("care_log.txt"));
}

#[test]
fn config_exports_report_to_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = CareConfig::under(dir.path());
    let pets = [
        Pet::bird("Sky", "Parrot", 1.2, 4.0).unwrap(),
        Pet::dog("Rex", "Husky", 20.0, 2.0).unwrap(),
    ];

    assert_eq!(config.export_report(&pets).unwrap(), 2);
    assert_eq!(
        fs::read_to_string(&config.report_path).unwrap(),
        "Sky, Age: 4, Weight: 1.2\nRex, Age: 2, Weight: 20\n"
    );
}
