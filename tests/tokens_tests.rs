use rbreakcheck::core::reconcile::tokens::{name_tokens, similarity};
use std::collections::BTreeSet;

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_tokens_split_camel_case_and_drop_digits() {
    assert_eq!(name_tokens("JohnSmith99"), set(&["john", "smith"]));
    assert_eq!(name_tokens("McDonald"), set(&["mc", "donald"]));
}

#[test]
fn test_tokens_drop_punctuation_and_single_letters() {
    assert_eq!(name_tokens("O'Neil, A."), set(&["neil"]));
    assert_eq!(name_tokens("  Smith   SMITH smith "), set(&["smith"]));
    assert!(name_tokens("A. B.").is_empty());
    assert!(name_tokens("").is_empty());
}

#[test]
fn test_tokens_break_on_accented_letters() {
    assert_eq!(name_tokens("José García"), set(&["jos", "garc"]));
    assert_eq!(name_tokens("ÉmileZola"), set(&["mile", "zola"]));
}

#[test]
fn test_similarity_accented_and_plain_spelling() {
    assert_eq!(similarity("Jose Garcia", "José García"), 1.0);
    assert_eq!(similarity("José García", "Jose Garcia"), 1.0);
}

#[test]
fn test_similarity_camel_case_display_name() {
    assert_eq!(similarity("John Smith", "JohnSmith99"), 1.0);
}

#[test]
fn test_similarity_substring_tokens() {
    // "ann" and "marie" are both inside "annmarie"
    assert_eq!(similarity("Ann Marie Lee", "Annmarie Lee"), 1.0);
}

#[test]
fn test_similarity_depends_on_iteration_side() {
    let forward = similarity("Ann Marie Lee", "Annmarie Lee");
    let backward = similarity("Annmarie Lee", "Ann Marie Lee");
    assert_eq!(forward, 1.0);
    assert!((backward - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_similarity_partial_overlap() {
    assert_eq!(similarity("Maria Lopez", "Maria Garcia"), 0.5);
    assert!((similarity("Chris Evans Brown", "Chris Pratt") - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_similarity_empty_token_sets_score_zero() {
    assert_eq!(similarity("", "John Smith"), 0.0);
    assert_eq!(similarity("John Smith", "12345"), 0.0);
    assert_eq!(similarity("J", "J"), 0.0);
}

#[test]
fn test_similarity_is_in_unit_interval() {
    let names = [
        "John Smith",
        "JohnSmith99",
        "Smith",
        "Ann Marie Lee",
        "Lee",
        "Jo",
        "Johnathan Smithers",
        "",
    ];
    for x in names {
        for y in names {
            let s = similarity(x, y);
            assert!((0.0..=1.0).contains(&s), "{x:?} vs {y:?} gave {s}");
        }
    }
}
