use super::*;
use crate::model::level::ThirdAxis;

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        ("Chapter 1".to_string(), LevelKind::Title(ThirdAxis::Area)),
        ("Stabilized Water".to_string(), LevelKind::Normal),
        ("Golden Thread".to_string(), LevelKind::Production),
    ])
    .unwrap()
}

fn score(a: i64, b: i64, c: i64) -> Score {
    Score::new(a, b, c, None).unwrap()
}

#[test]
fn test_catalog_order_stable() {
    let catalog = sample_catalog();
    let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Chapter 1", "Stabilized Water", "Golden Thread"]);
    assert_eq!(catalog.kind_of("Golden Thread"), Some(LevelKind::Production));
    assert!(catalog.get("Chapter 1").unwrap().frontier().is_none());
    assert!(catalog.get("Stabilized Water").unwrap().frontier().is_some());
}

#[test]
fn test_duplicate_level_rejected() {
    let err = Catalog::new(vec![
        ("A".to_string(), LevelKind::Normal),
        ("A".to_string(), LevelKind::Production),
    ])
    .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateLevel("A".to_string()));
}

#[test]
fn test_insert_routes_to_level() {
    let mut catalog = sample_catalog();
    assert_eq!(catalog.insert("Golden Thread", score(10, 10, 10)), Ok(true));
    assert_eq!(catalog.insert("Golden Thread", score(11, 10, 10)), Ok(false));
    assert_eq!(catalog.total_scores(), 1);
    assert!(
        catalog
            .get("Stabilized Water")
            .unwrap()
            .frontier()
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_unknown_level_leaves_state_untouched() {
    let mut catalog = sample_catalog();
    catalog.insert("Golden Thread", score(1, 2, 3)).unwrap();
    let before = catalog.snapshot().into_iter().map(|(n, s)| (n.to_string(), s)).collect::<Vec<_>>();

    let err = catalog.insert("Nonexistent", score(0, 0, 0)).unwrap_err();
    assert_eq!(err, CatalogError::UnknownLevel("Nonexistent".to_string()));
    let err = catalog.insert("Chapter 1", score(0, 0, 0)).unwrap_err();
    assert_eq!(err, CatalogError::NotScored("Chapter 1".to_string()));

    let after = catalog.snapshot().into_iter().map(|(n, s)| (n.to_string(), s)).collect::<Vec<_>>();
    assert_eq!(before, after);
}

#[test]
fn test_snapshot_skips_titles_and_restores() {
    let mut catalog = sample_catalog();
    catalog.insert("Golden Thread", score(30, 445, 351)).unwrap();
    catalog
        .insert(
            "Golden Thread",
            Score::new(150, 49, 199, Some("http://x.io/a.gif".to_string())).unwrap(),
        )
        .unwrap();

    let snapshot = catalog.snapshot();
    assert_eq!(
        snapshot,
        vec![
            ("Stabilized Water", String::new()),
            (
                "Golden Thread",
                "30/445/351 - 150/49/199 http://x.io/a.gif".to_string()
            ),
        ]
    );

    let mut restored = sample_catalog();
    for (name, encoded) in &snapshot {
        restored.restore(name, encoded).unwrap();
    }
    assert_eq!(
        restored.get("Golden Thread").unwrap().frontier(),
        catalog.get("Golden Thread").unwrap().frontier()
    );
}

#[test]
fn test_summary_only_for_levels() {
    let mut catalog = sample_catalog();
    catalog.insert("Stabilized Water", score(1, 2, 3)).unwrap();
    assert!(catalog.get("Chapter 1").unwrap().summary().is_none());
    let summary = catalog.get("Stabilized Water").unwrap().summary().unwrap();
    assert_eq!(summary.sum_best().unwrap().stats(), [1, 2, 3]);
}
