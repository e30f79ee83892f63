//! Assertion-context behavior: counting, message formats, and the
//! usage-error asymmetry of containment checks.

use attest::value::{Object, TypeTag, Value};
use attest::{AttestError, TestContext};

#[test]
fn assertion_count_tracks_every_call_regardless_of_outcome() {
    let mut t = TestContext::new();
    t.assert_true(true);
    t.assert_true(false);
    t.assert_eq(1, 2);
    t.assert_ne(1, 1);
    t.assert_array("not a collection");

    assert_eq!(t.assertion_count(), 5);
    assert_eq!(t.failure_count(), 4);
    assert_eq!(t.errors().len(), 4);
}

#[test]
fn assert_eq_passes_on_identical_values() {
    let mut t = TestContext::new();
    t.assert_eq(4, 4);
    t.assert_eq("same", "same");
    t.assert_eq(
        Value::Sequence(vec![1.into(), 2.into()]),
        Value::Sequence(vec![1.into(), 2.into()]),
    );

    assert!(t.passed());
    assert_eq!(t.assertion_count(), 3);
}

#[test]
fn assert_eq_fails_across_types_even_when_displays_match() {
    let mut t = TestContext::new();
    t.assert_eq(Value::Number(1.0), Value::Text("1".into()));

    assert_eq!(t.failure_count(), 1);
    assert_eq!(t.errors()[0], "expected [1] but got [1]");
}

#[test]
fn assert_ne_is_the_exact_negation_of_assert_eq() {
    let mut eq = TestContext::new();
    let mut ne = TestContext::new();
    let cases: Vec<(Value, Value)> = vec![
        (1.into(), 1.into()),
        (1.into(), 2.into()),
        ("a".into(), "a".into()),
        (Value::Number(1.0), Value::Text("1".into())),
        (Value::Absent, Value::Absent),
    ];

    for (left, right) in cases {
        eq.assert_eq(left.clone(), right.clone());
        ne.assert_ne(left, right);
    }

    // Every case fails exactly one of the two contexts.
    assert_eq!(eq.failure_count() + ne.failure_count(), 5);
    assert_eq!(eq.assertion_count(), ne.assertion_count());
}

#[test]
fn assert_true_requires_exactly_boolean_true() {
    let mut t = TestContext::new();
    t.assert_true(true);
    t.assert_true(1);
    t.assert_true("true");

    assert_eq!(t.failure_count(), 2);
    assert_eq!(t.errors()[0], "expected value to be true, was [1]");
    assert_eq!(t.errors()[1], "expected value to be true, was [true]");
}

#[test]
fn assert_false_requires_exactly_boolean_false() {
    let mut t = TestContext::new();
    t.assert_false(false);
    t.assert_false(0);

    assert_eq!(t.failure_count(), 1);
    assert_eq!(t.errors()[0], "expected value to be false, was [0]");
}

#[test]
fn assert_array_accepts_both_collection_shapes() {
    let mut t = TestContext::new();
    t.assert_array(Value::Sequence(vec![]));
    t.assert_array(Value::Mapping(im::HashMap::new()));
    t.assert_array("scalar");

    assert_eq!(t.failure_count(), 1);
    assert_eq!(t.errors()[0], "expected a collection value, was [scalar]");
}

#[test]
fn contains_finds_substrings_in_text() {
    let mut t = TestContext::new();
    t.assert_contains("ell", "Hello").unwrap();
    assert!(t.passed());

    t.assert_contains("zz", "Hello").unwrap();
    assert_eq!(t.failure_count(), 1);
    assert_eq!(t.errors()[0], "expected [Hello] to contain [zz]");
}

#[test]
fn contains_checks_sequence_membership_by_strict_equality() {
    let mut t = TestContext::new();
    let seq = Value::Sequence(vec![1.into(), "two".into()]);
    t.assert_contains(1, seq.clone()).unwrap();
    t.assert_contains("two", seq.clone()).unwrap();
    assert!(t.passed());

    // "1" is not the number 1.
    t.assert_contains("1", seq).unwrap();
    assert_eq!(t.failure_count(), 1);
}

#[test]
fn contains_checks_mapping_values() {
    let mut t = TestContext::new();
    let mut map = im::HashMap::new();
    map.insert("greeting".to_string(), Value::from("hi"));
    t.assert_contains("hi", Value::Mapping(map.clone())).unwrap();
    t.assert_not_contains("bye", Value::Mapping(map)).unwrap();

    assert!(t.passed());
    assert_eq!(t.assertion_count(), 2);
}

#[test]
fn contains_searches_object_display_text() {
    let mut t = TestContext::new();
    let point = Object::new(TypeTag::new("Point")).with_field("x", 1);
    t.assert_contains("Point", Value::from(point)).unwrap();

    assert!(t.passed());
}

#[test]
fn not_contains_inverts_the_presence_expectation() {
    let mut t = TestContext::new();
    t.assert_not_contains("zz", "Hello").unwrap();
    assert!(t.passed());

    t.assert_not_contains("ell", "Hello").unwrap();
    assert_eq!(t.failure_count(), 1);
    assert_eq!(t.errors()[0], "expected [Hello] to not contain [ell]");
}

#[test]
fn contains_on_an_unsearchable_haystack_is_a_usage_error() {
    let mut t = TestContext::new();
    let err = t.assert_contains("x", 42).unwrap_err();

    assert!(matches!(err, AttestError::UnsupportedHaystack { .. }));
    // The attempt was counted, but no assertion failure was recorded.
    assert_eq!(t.assertion_count(), 1);
    assert_eq!(t.failure_count(), 0);

    let err = t.assert_contains("x", Value::Absent).unwrap_err();
    assert!(err.to_string().contains("absent"));
}

#[test]
fn instance_of_accepts_subtypes() {
    let animal = TypeTag::new("Animal");
    let dog = TypeTag::subtype_of("Dog", animal.clone());

    let mut t = TestContext::new();
    t.assert_instance_of(&animal, Object::new(dog.clone()));
    assert!(t.passed());

    t.assert_instance_of(&TypeTag::new("Cat"), Object::new(dog));
    assert_eq!(t.failure_count(), 1);
    assert_eq!(t.errors()[0], "expected [Cat] but got [Dog]");
}

#[test]
fn not_instance_of_rejects_the_type_and_its_subtypes() {
    let animal = TypeTag::new("Animal");
    let dog = TypeTag::subtype_of("Dog", animal.clone());

    let mut t = TestContext::new();
    t.assert_not_instance_of(&animal, Object::new(dog));
    assert_eq!(t.failure_count(), 1);
    assert_eq!(
        t.errors()[0],
        "expected [Dog] to not be an instance of [Animal]"
    );

    t.assert_not_instance_of(&TypeTag::new("Cat"), Object::new(TypeTag::new("Dog")));
    assert_eq!(t.failure_count(), 1);
}
