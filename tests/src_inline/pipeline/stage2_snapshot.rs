use super::*;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::level::LevelKind;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("om_leaderboard_stage2_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        ("Golden Thread".to_string(), LevelKind::Normal),
        ("Van Berlo's Wheel".to_string(), LevelKind::Normal),
    ])
    .unwrap()
}

#[test]
fn test_missing_snapshot_starts_empty() {
    let dir = make_temp_dir();
    let mut c = catalog();
    let parsed = run_stage2(&dir.join("scores.csv"), &mut c).unwrap();
    assert_eq!(parsed, 0);
    assert_eq!(c.total_scores(), 0);
}

#[test]
fn test_snapshot_restores_and_prunes() {
    let dir = make_temp_dir();
    let path = dir.join("scores.csv");
    fs::write(
        &path,
        "name,scores\r\nGolden Thread,30/445/351 - 150/49/199 http://x.io/a.gif - 200/500/400\r\nVan Berlo's Wheel,\r\n",
    )
    .unwrap();

    let mut c = catalog();
    let parsed = run_stage2(&path, &mut c).unwrap();
    assert_eq!(parsed, 3);
    // 200/500/400 is dominated by 30/445/351
    assert_eq!(c.total_scores(), 2);
    assert_eq!(
        c.get("Golden Thread").unwrap().frontier().unwrap().encode(),
        "30/445/351 - 150/49/199 http://x.io/a.gif"
    );
}
