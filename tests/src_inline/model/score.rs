use super::*;
use crate::model::level::ThirdAxis;

fn score(a: i64, b: i64, c: i64) -> Score {
    Score::new(a, b, c, None).unwrap()
}

fn linked(a: i64, b: i64, c: i64, link: &str) -> Score {
    Score::new(a, b, c, Some(link.to_string())).unwrap()
}

#[test]
fn test_negative_stat_is_invalid() {
    let err = Score::new(10, -1, 5, None).unwrap_err();
    assert_eq!(err, ScoreError::InvalidScore { a: 10, b: -1, c: 5 });
    assert!(Score::new(0, 0, 0, None).is_ok());
}

#[test]
fn test_reference_with_separator_is_invalid() {
    let err = Score::new(1, 2, 3, Some("http://x.io/a - b.gif".to_string())).unwrap_err();
    assert_eq!(
        err,
        ScoreError::InvalidReference("http://x.io/a - b.gif".to_string())
    );
    assert!(Score::new(1, 2, 3, Some("http://x.io/a-b.gif".to_string())).is_ok());
}

#[test]
fn test_parse_bare_and_linked() {
    let s = Score::parse("30/445/351").unwrap();
    assert_eq!(s.stats(), [30, 445, 351]);
    assert_eq!(s.reference(), None);

    let s = Score::parse("100/50/50 http://x.io/a.gif").unwrap();
    assert_eq!(s.stats(), [100, 50, 50]);
    assert_eq!(s.reference(), Some("http://x.io/a.gif"));
}

#[test]
fn test_parse_ignores_reference_without_dot() {
    let s = Score::parse("1/2/3 nolink").unwrap();
    assert_eq!(s.stats(), [1, 2, 3]);
    assert_eq!(s.reference(), None);
}

#[test]
fn test_parse_no_match() {
    assert_eq!(Score::parse("cost 30 cycles 445"), None);
    assert_eq!(Score::parse(" 1/2/3"), None);
    assert_eq!(Score::parse("1/2"), None);
    assert_eq!(Score::parse(""), None);
    assert_eq!(Score::parse("99999999999999999999/1/1"), None);
}

#[test]
fn test_from_four_uses_fourth_only_for_production() {
    let p = Score::from_four(10, 20, 30, Some(40), LevelKind::Production, None).unwrap();
    assert_eq!(p.stats(), [10, 20, 40]);

    let n = Score::from_four(10, 20, 30, Some(40), LevelKind::Normal, None).unwrap();
    assert_eq!(n.stats(), [10, 20, 30]);

    let p3 = Score::from_four(10, 20, 30, None, LevelKind::Production, None).unwrap();
    assert_eq!(p3.stats(), [10, 20, 30]);

    let t = Score::from_four(1, 2, 3, Some(4), LevelKind::Title(ThirdAxis::Area), None).unwrap();
    assert_eq!(t.stats(), [1, 2, 3]);

    assert!(Score::from_four(1, 2, -3, Some(4), LevelKind::Production, None).is_ok());
    assert!(Score::from_four(1, 2, 3, Some(-4), LevelKind::Production, None).is_err());
}

#[test]
fn test_renderings() {
    let bare = score(30, 445, 351);
    assert_eq!(bare.simple_str(), "30/445/351");
    assert_eq!(bare.compact_str(), "30/445/351");
    assert_eq!(bare.to_string(), "30/445/351");

    let doc = linked(30, 445, 351, "http://x.io");
    assert_eq!(doc.simple_str(), "30/445/351");
    assert_eq!(doc.compact_str(), "30/445/351 http://x.io");
    assert_eq!(doc.to_string(), "[30/445/351](http://x.io)");
}

#[test]
fn test_compact_form_parses_back() {
    let doc = linked(7, 8, 9, "https://i.imgur.com/abc.gifv");
    assert_eq!(Score::parse(&doc.compact_str()), Some(doc));
}

#[test]
fn test_strict_dominance_ignores_tie_break() {
    let better = score(5, 5, 5);
    let worse = linked(10, 10, 10, "http://x.io");
    assert!(better.dominates(&worse, TieBreak::Retain));
    assert!(better.dominates(&worse, TieBreak::Evict));
    assert!(!worse.dominates(&better, TieBreak::Retain));
    assert!(!worse.dominates(&better, TieBreak::Evict));
}

#[test]
fn test_incomparable_scores() {
    let a = score(30, 445, 351);
    let b = score(150, 49, 199);
    assert!(!a.dominates(&b, TieBreak::Evict));
    assert!(!b.dominates(&a, TieBreak::Evict));
}

#[test]
fn test_tie_break_directions() {
    let bare = score(100, 50, 50);
    let doc = linked(100, 50, 50, "http://x.io");

    assert!(doc.dominates(&bare, TieBreak::Retain));
    assert!(!bare.dominates(&doc, TieBreak::Retain));
    assert!(!bare.dominates(&bare.clone(), TieBreak::Retain));

    assert!(doc.dominates(&bare, TieBreak::Evict));
    assert!(!bare.dominates(&doc, TieBreak::Evict));
    assert!(bare.dominates(&bare.clone(), TieBreak::Evict));
    assert!(doc.dominates(&doc.clone(), TieBreak::Evict));
}

#[test]
fn test_products_and_sum() {
    let s = score(30, 445, 351);
    assert_eq!(s.product_excluding(0), 445 * 351);
    assert_eq!(s.product_excluding(1), 30 * 351);
    assert_eq!(s.product_excluding(2), 30 * 445);
    assert_eq!(s.sum(), 826);
}
