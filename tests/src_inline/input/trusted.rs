use super::*;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("om_leaderboard_trusted_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_parse_skips_blank_lines() {
    let users = TrustedUsers::parse("alice\n\n  bob \r\n\n");
    assert_eq!(users.len(), 2);
    assert!(users.contains("alice"));
    assert!(users.contains("bob"));
    assert!(!users.contains(""));
}

#[test]
fn test_policy_admits() {
    let trusted = SubmitterPolicy::Trusted(TrustedUsers::parse("alice\n"));
    assert!(trusted.admits(Some("alice")));
    assert!(!trusted.admits(Some("mallory")));
    assert!(!trusted.admits(None));

    assert!(SubmitterPolicy::Everybody.admits(Some("mallory")));
    assert!(SubmitterPolicy::Everybody.admits(None));
}

#[test]
fn test_load_trusted_users() {
    let dir = make_temp_dir();
    let path = dir.join("trusted_users.txt");
    fs::write(&path, "alice\nbob\n").unwrap();
    let users = load_trusted_users(&path).unwrap();
    assert!(users.contains("bob"));

    let err = load_trusted_users(&dir.join("missing.txt")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
    fs::remove_dir_all(&dir).unwrap();
}
