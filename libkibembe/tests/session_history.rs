// libkibembe/tests/session_history.rs
//
// Integration tests for `Session` on top of the persistent history.
//
// Tests cover:
// - Successful translations are persisted under the configured key
// - Failed translations are never recorded
// - Reopening the database restores the list, newest first
// - The configured limit applies to the persistent store

use libkibembe::{History, KibembeConfig, Session, TranslateError};
use std::path::PathBuf;

fn temp_db(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "libkibembe_session_{}_{}.redb",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn open(path: &PathBuf, cfg: &KibembeConfig) -> Session {
    let base = cfg.base();
    Session::new(History::open_redb(path, &base.history_key, base.history_limit).unwrap())
}

#[test]
fn translations_persist_across_sessions() {
    let path = temp_db("persist");
    let cfg = KibembeConfig::default();
    {
        let session = open(&path, &cfg);
        session.translate("23").unwrap();
        session.translate("one thousand").unwrap();
        assert!(session.translate("banana").is_err());
    }

    let session = open(&path, &cfg);
    let records = session.history().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].input, "one thousand");
    assert_eq!(records[0].output, "elufu emo");
    assert_eq!(records[1].input, "23");
    drop(session);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn errors_are_not_recorded() {
    let path = temp_db("errors");
    let cfg = KibembeConfig::default();
    let session = open(&path, &cfg);
    assert_eq!(session.translate("  "), Err(TranslateError::EmptyInput));
    assert!(matches!(
        session.translate("99999"),
        Err(TranslateError::NumberTooLarge { .. })
    ));
    assert!(session.history().unwrap().is_empty());
    drop(session);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn configured_limit_applies() {
    let path = temp_db("limit");
    let cfg = KibembeConfig::from_toml_str("history_limit = 2\n").unwrap();
    let session = open(&path, &cfg);
    session.translate("1").unwrap();
    session.translate("2").unwrap();
    session.translate("3").unwrap();
    let inputs: Vec<String> = session
        .history()
        .unwrap()
        .into_iter()
        .map(|r| r.input)
        .collect();
    assert_eq!(inputs, vec!["3", "2"]);
    drop(session);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn repeat_moves_to_front_and_clear_empties() {
    let path = temp_db("repeat");
    let cfg = KibembeConfig::default();
    let session = open(&path, &cfg);
    session.translate("5").unwrap();
    session.translate("6").unwrap();
    session.translate("5").unwrap();
    let records = session.history().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].input, "5");
    assert!(records[0].timestamp >= records[1].timestamp);

    session.clear_history().unwrap();
    assert!(session.history().unwrap().is_empty());
    drop(session);
    let _ = std::fs::remove_file(&path);
}
