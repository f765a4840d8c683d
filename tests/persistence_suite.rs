use income_tracker::{
    errors::LedgerError,
    ledger::{Ledger, LoadOutcome, Period},
    storage::{JsonFileStore, LedgerStore},
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_daily(Some("2025-01-15"), 100.0).unwrap();
    ledger.add_daily(Some("2025-01-15"), 50.0).unwrap();
    ledger.add_daily(Some("2024-12-31"), 19.99).unwrap();
    ledger.add_monthly(Some("2025-01"), 3500.0).unwrap();
    ledger.add_monthly(Some("2025-13"), 1.0).unwrap();
    ledger.add_yearly(Some("2025"), 50000.0).unwrap();
    ledger
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn roundtrip_reproduces_every_period() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("budget_data.json");
    let ledger = sample_ledger();
    ledger.save(&path).expect("save ledger");

    let mut restored = Ledger::new();
    assert_eq!(restored.load(&path).unwrap(), LoadOutcome::Loaded);
    for period in Period::ALL {
        assert_eq!(restored.list_all(period), ledger.list_all(period), "{period}");
    }
}

#[test]
fn yearly_income_survives_save_and_load() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("budget_data.json");
    let mut ledger = Ledger::new();
    ledger.add_yearly(Some("2025"), 50000.0).unwrap();
    ledger.save(&path).unwrap();

    let mut restored = Ledger::new();
    restored.load(&path).unwrap();
    assert_eq!(restored.get_yearly(Some("2025")), 50000.0);
}

#[test]
fn loading_missing_file_keeps_current_state() {
    let temp = tempdir().unwrap();
    let mut ledger = sample_ledger();
    let before = ledger.clone();

    let outcome = ledger
        .load(&temp.path().join("does-not-exist.json"))
        .expect("missing file is not an error");
    assert_eq!(outcome, LoadOutcome::Missing);
    assert_eq!(ledger, before);
}

#[test]
fn load_replaces_state_wholesale() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("budget_data.json");
    let mut on_disk = Ledger::new();
    on_disk.add_monthly(Some("2023-04"), 12.0).unwrap();
    on_disk.save(&path).unwrap();

    let mut ledger = sample_ledger();
    ledger.load(&path).unwrap();
    assert!(ledger.all_daily().is_empty());
    assert!(ledger.all_yearly().is_empty());
    assert_eq!(ledger.get_monthly(Some("2023-04")), 12.0);
    assert_eq!(ledger.get_monthly(Some("2025-01")), 0.0);
}

#[test]
fn file_uses_daily_monthly_yearly_fields() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("budget_data.json");
    sample_ledger().save(&path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = raw.as_object().expect("top-level object");
    let mut fields: Vec<_> = object.keys().cloned().collect();
    fields.sort();
    assert_eq!(fields, vec!["daily", "monthly", "yearly"]);
    assert_eq!(raw["daily"]["2025-01-15"], serde_json::json!(150.0));
    assert_eq!(raw["yearly"]["2025"], serde_json::json!(50000.0));
}

#[test]
fn reads_files_written_by_hand() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("budget_data.json");
    fs::write(
        &path,
        r#"{"daily": {"2025-01-15": 150}, "monthly": {}, "yearly": {"2025": 50000.5}}"#,
    )
    .unwrap();

    let mut ledger = Ledger::new();
    ledger.load(&path).unwrap();
    assert_eq!(ledger.get_daily(Some("2025-01-15")), 150.0);
    assert_eq!(ledger.get_yearly(Some("2025")), 50000.5);
}

#[test]
fn malformed_file_is_a_serialization_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("budget_data.json");
    fs::write(&path, "{ this is not json").unwrap();

    let mut ledger = sample_ledger();
    let err = ledger.load(&path).unwrap_err();
    assert!(matches!(err, LedgerError::Serde(_)));
    assert_eq!(ledger, sample_ledger());
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let store = JsonFileStore::new(temp.path().join("budget_data.json"));

    let mut ledger = sample_ledger();
    store.save(&ledger).expect("initial save");
    let original = fs::read_to_string(store.location()).expect("read original file");

    // A directory squatting on the staging path makes File::create fail.
    let tmp_path = tmp_path_for(store.location());
    fs::create_dir_all(&tmp_path).unwrap();

    ledger.add_yearly(Some("2026"), 1.0).unwrap();
    let result = store.save(&ledger);
    assert!(matches!(result, Err(LedgerError::Io(_))));

    let current = fs::read_to_string(store.location()).expect("read after failure");
    assert_eq!(
        current, original,
        "failed save must not corrupt the existing file"
    );
}

#[test]
fn negative_amount_in_file_is_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("budget_data.json");
    fs::write(&path, r#"{"daily":{"2025-01-15":-500.0}}"#).unwrap();

    let mut ledger = sample_ledger();
    let err = ledger.load(&path).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(amount) if amount == -500.0));
    assert_eq!(ledger, sample_ledger());

    let store = JsonFileStore::new(path.clone());
    assert!(matches!(store.load(), Err(LedgerError::InvalidAmount(_))));
}

#[test]
fn largest_accepted_totals_survive_save_and_load() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("budget_data.json");
    let mut ledger = Ledger::new();
    ledger.add_yearly(Some("2025"), 1e308).unwrap();
    assert!(ledger.add_yearly(Some("2025"), 1e308).is_err());
    ledger.save(&path).unwrap();

    let mut restored = Ledger::new();
    assert_eq!(restored.load(&path).unwrap(), LoadOutcome::Loaded);
    assert_eq!(restored, ledger);
}
