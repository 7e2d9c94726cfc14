#![forbid(unsafe_code)]
use chrono::{NaiveDate, NaiveTime};
use shiftplan::{
    io, plan_period, PeriodRoster, PlanOptions, Preference, SlotCatalog, SlotDefinition, SlotId,
    StaffId,
};
use std::fs;
use tempfile::tempdir;

fn small_catalog() -> SlotCatalog {
    let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
    SlotCatalog::new(vec![
        SlotDefinition::new("morning", t(9), t(15), 1),
        SlotDefinition::new("late", t(17), t(23), 1),
    ])
    .unwrap()
}

#[test]
fn import_staff_csv_parses_active_flag() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("staff.csv");
    fs::write(
        &path,
        "staff_id,name,active\na,Aiko,true\nb,Ben,\nc,Chika,no\n",
    )
    .unwrap();

    let staff = io::import_staff_csv(&path).unwrap();
    assert_eq!(staff.len(), 3);
    assert_eq!(staff[0].id, StaffId::new("a"));
    assert!(staff[0].active);
    assert!(staff[1].active); // blank flag keeps the default
    assert!(!staff[2].active);
}

#[test]
fn import_preferences_csv_accepts_dates_and_datetimes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.csv");
    fs::write(
        &path,
        "staff_id,date,preference\n\
         a,2025-11-01,late\n\
         a,2025-11-02T09:30:00Z,off\n\
         b,2025-11-01,any\n\
         b,2025-11-02,unavailable\n",
    )
    .unwrap();

    let records = io::import_preferences_csv(&path).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(
        records[0].preference,
        Preference::Slot(SlotId::new("late"))
    );
    // timestamp collapses to its calendar day
    assert_eq!(
        records[1].date,
        NaiveDate::from_ymd_opt(2025, 11, 2).unwrap()
    );
    assert_eq!(records[1].preference, Preference::Unavailable);
    assert_eq!(records[2].preference, Preference::Any);
    assert_eq!(records[3].preference, Preference::Unavailable);
}

#[test]
fn import_rejects_rows_with_missing_fields() {
    let dir = tempdir().unwrap();
    let staff_path = dir.path().join("staff.csv");
    fs::write(&staff_path, "staff_id,name\n,Aiko\n").unwrap();
    assert!(io::import_staff_csv(&staff_path).is_err());

    let prefs_path = dir.path().join("prefs.csv");
    fs::write(&prefs_path, "staff_id,date,preference\na,not-a-date,late\n").unwrap();
    assert!(io::import_preferences_csv(&prefs_path).is_err());
}

#[test]
fn exported_roster_csv_lists_one_row_per_assignment() {
    let dir = tempdir().unwrap();
    let staff_path = dir.path().join("staff.csv");
    fs::write(&staff_path, "staff_id,name\na,Aiko\nb,Ben\n").unwrap();
    let staff = io::import_staff_csv(&staff_path).unwrap();

    let d = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    let prefs = vec![shiftplan::PreferenceRecord::new(
        StaffId::new("a"),
        d,
        Preference::Slot(SlotId::new("late")),
    )];
    let roster =
        plan_period(d, d, &staff, &prefs, &small_catalog(), PlanOptions::default()).unwrap();

    let out = dir.path().join("roster.csv");
    io::export_roster_csv(&out, &roster, &staff).unwrap();
    let contents = fs::read_to_string(&out).unwrap();
    insta::assert_snapshot!(contents.trim_end(), @r"
    date,slot,staff_id,staff_name
    2025-11-01,morning,b,Ben
    2025-11-01,late,a,Aiko
    ");
}

#[test]
fn exported_roster_json_roundtrips() {
    let dir = tempdir().unwrap();
    let d = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    let staff = vec![
        shiftplan::StaffMember::new("a", "Aiko"),
        shiftplan::StaffMember::new("b", "Ben"),
    ];
    let roster =
        plan_period(d, d, &staff, &[], &small_catalog(), PlanOptions::default()).unwrap();

    let out = dir.path().join("roster.json");
    io::export_roster_json(&out, &roster).unwrap();
    let parsed: PeriodRoster =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(parsed, roster);
}
