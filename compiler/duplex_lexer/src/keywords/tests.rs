use super::*;
use pretty_assertions::assert_eq;

#[test]
fn seeded_with_reserved_words() {
    let table = WordTable::new();
    assert_eq!(table.len(), Keyword::ALL.len());
    assert!(!table.is_empty());
    for keyword in Keyword::ALL {
        assert_eq!(table.keyword(keyword.as_str()), Some(keyword));
    }
}

#[test]
fn keywords_resolve_to_their_seeded_entry() {
    let mut table = WordTable::new();
    let word = table.resolve("while").unwrap();
    assert_eq!(word.keyword, Some(Keyword::While));
    assert_eq!(table.text(word.name), "while");
    assert_eq!(table.len(), Keyword::ALL.len());
}

#[test]
fn identifiers_are_interned_once() {
    let mut table = WordTable::new();
    let first = table.resolve("count").unwrap();
    let second = table.resolve("count").unwrap();
    assert_eq!(first, second);
    assert!(!first.is_keyword());
    assert_eq!(table.len(), Keyword::ALL.len() + 1);
}

#[test]
fn distinct_identifiers_get_distinct_names() {
    let mut table = WordTable::new();
    let x = table.resolve("x").unwrap();
    let y = table.resolve("y").unwrap();
    assert_ne!(x.name, y.name);
}

#[test]
fn keyword_match_is_case_sensitive() {
    let mut table = WordTable::new();
    assert_eq!(table.keyword("If"), None);
    let word = table.resolve("IF").unwrap();
    assert!(!word.is_keyword());
}

#[test]
fn keyword_prefixes_are_identifiers() {
    let mut table = WordTable::new();
    for text in ["i", "iff", "whiles", "fo", "done"] {
        let word = table.resolve(text).unwrap();
        assert_eq!(word.keyword, None, "{text}");
    }
}
