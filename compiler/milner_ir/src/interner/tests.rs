use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.len(), 1);
    assert!(!interner.is_empty());
}

#[test]
fn interning_is_idempotent() {
    let interner = StringInterner::new();
    let first = interner.intern("factorial");
    let second = interner.intern("factorial");
    assert_eq!(first, second);
    assert_eq!(interner.len(), 2);
}

#[test]
fn distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let zero = interner.intern("zero?");
    let pred = interner.intern("pred");
    assert_ne!(zero, pred);
    assert_eq!(interner.lookup(zero), "zero?");
    assert_eq!(interner.lookup(pred), "pred");
}

#[test]
fn foreign_name_resolves_to_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(99)), "");
}
