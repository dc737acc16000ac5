use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_and_lookup() {
    let mut interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_keywords_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.len(), Keyword::ALL.len());

    for keyword in Keyword::ALL {
        let name = interner.get(keyword.as_str());
        assert_eq!(name.and_then(Keyword::from_name), Some(keyword));
    }
}

#[test]
fn test_keyword_reintern_returns_seeded_name() {
    let mut interner = StringInterner::new();
    let before = interner.len();
    let if_name = interner.intern("if");
    assert_eq!(Keyword::from_name(if_name), Some(Keyword::If));
    assert_eq!(interner.len(), before);
}

#[test]
fn test_new_names_follow_keywords() {
    let mut interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(x.index(), Keyword::ALL.len());
    assert_eq!(Keyword::from_name(x), None);
}

#[test]
fn test_get_does_not_insert() {
    let interner = StringInterner::new();
    assert_eq!(interner.get("missing"), None);
    assert_eq!(interner.len(), Keyword::ALL.len());
}

#[test]
fn test_case_sensitive() {
    let mut interner = StringInterner::new();
    let upper = interner.intern("IF");
    assert_eq!(Keyword::from_name(upper), None);
    assert_ne!(Some(upper), interner.get("if"));
}

#[test]
fn test_overflow_error_display() {
    let err = InternError::Overflow { count: 7 };
    assert!(err.to_string().contains("7 entries"));
}
