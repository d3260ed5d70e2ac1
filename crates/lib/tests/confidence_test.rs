//! # Confidence Classification Tests

mod common;

use common::{entry, fixture_knowledge_base};
use formaid::{knowledge::classify, Category, Confidence, KnowledgeBase};

#[test]
fn test_no_hits_is_unknown() {
    let kb = fixture_knowledge_base();
    assert_eq!(classify(&kb, "asdlkjasdlkj nonsense"), Confidence::Unknown);
    assert_eq!(classify(&kb, "   "), Confidence::Unknown);
}

#[test]
fn test_strong_hit_with_support_is_high() {
    let kb = fixture_knowledge_base();
    // Terminology entry plus the FAQ about contacting a caseworker.
    assert_eq!(classify(&kb, "What is a caseworker?"), Confidence::High);
}

#[test]
fn test_single_strong_hit_is_medium() {
    let kb = fixture_knowledge_base();
    assert_eq!(classify(&kb, "phone"), Confidence::Medium);
}

#[test]
fn test_two_weak_hits_are_medium() {
    let kb = fixture_knowledge_base();
    // A validation rule and a guide: several hits, none strong.
    assert_eq!(classify(&kb, "postal upload"), Confidence::Medium);
}

#[test]
fn test_single_weak_hit_is_low() {
    let kb = fixture_knowledge_base();
    assert_eq!(classify(&kb, "scan"), Confidence::Low);
}

#[test]
fn test_empty_store_is_always_unknown() {
    let kb = KnowledgeBase::from_entries(Vec::new()).unwrap();
    assert_eq!(classify(&kb, "caseworker"), Confidence::Unknown);
}

#[test]
fn test_only_top_three_hits_are_considered() {
    // Three weak hits outrank the only strong one, which falls outside the window.
    let kb = KnowledgeBase::from_entries(vec![
        entry("g1", Category::Guide, "Deposit", "x", &["deposit"], &[]),
        entry("g2", Category::Guide, "Deposit setup", "x", &["deposit"], &[]),
        entry("g3", Category::Guide, "Deposit changes", "x", &["deposit"], &[]),
        entry("f1", Category::Faq, "Payments", "Sent by deposit.", &[], &[]),
    ])
    .unwrap();
    assert_eq!(classify(&kb, "deposit"), Confidence::Medium);
}
