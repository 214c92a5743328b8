mod common;

use chrono::NaiveDate;
use fotoconnect_core::{
    config::{Config, DateFormatStyle},
    domain::{parse_payload, Transaction, TransactionKind},
    storage::StorageBackend,
};

fn sample_transactions() -> Vec<Transaction> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    vec![
        Transaction::new(1, 7, 10000, TransactionKind::Income, date),
        Transaction::new(2, 7, 2000, TransactionKind::Expense, date).with_category("studio rent"),
    ]
}

#[test]
fn storage_round_trips_transactions() {
    let (storage, _) = common::setup_test_env();
    storage
        .save_transactions("wedding-shoots", &sample_transactions())
        .unwrap();

    let loaded = storage.load_transactions("wedding-shoots").unwrap();
    assert_eq!(loaded, sample_transactions());
    assert_eq!(storage.list_profiles().unwrap(), vec!["wedding-shoots"]);
}

#[test]
fn unknown_profile_is_empty_not_an_error() {
    let (storage, _) = common::setup_test_env();
    assert!(storage.load_transactions("missing").unwrap().is_empty());
}

#[test]
fn config_round_trips_display_preferences() {
    let (_, config_manager) = common::setup_test_env();
    let mut config = Config::default();
    config.currency = "EUR".into();
    config.date_format = DateFormatStyle::Long;
    config.default_period = "7d".into();
    config_manager.save(&config).unwrap();

    let loaded = config_manager.load().unwrap();
    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.date_format, DateFormatStyle::Long);
    assert_eq!(loaded.default_period, "7d");
}

#[test]
fn imported_payload_survives_storage() {
    let (storage, _) = common::setup_test_env();
    let payload = r#"[
        {"id": 1, "user_id": 7, "amount": 10000, "kind": "income", "date": "2024-03-10"},
        {"id": 2, "user_id": 7, "amount": -2000, "kind": "expense", "date": "2024-03-11"}
    ]"#;
    let transactions = parse_payload(payload).unwrap();
    storage.save_transactions("default", &transactions).unwrap();

    let loaded = storage.load_transactions("default").unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].amount_cents, -2000);
    assert!((loaded[1].amount_major() - 20.0).abs() < f64::EPSILON);
}
