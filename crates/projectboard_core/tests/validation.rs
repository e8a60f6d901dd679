use projectboard_core::{validate, FieldValue, Validatable};

#[test]
fn required_fails_for_blank_text() {
    for value in ["", " ", "\t", "\n  \t"] {
        assert!(!validate(&Validatable::text(value).required()));
    }
}

#[test]
fn required_passes_for_numeric_zero() {
    let spec = Validatable {
        value: FieldValue::Number(0.0),
        required: true,
        min_length: None,
        max_length: None,
        min: None,
        max: None,
    };
    assert!(validate(&spec));
}

#[test]
fn length_constraints_combine() {
    assert!(!validate(&Validatable::text("ab").required().min_length(3)));
    assert!(validate(&Validatable::text("abcd").min_length(3).max_length(5)));
}

#[test]
fn numeric_constraints_are_inclusive() {
    assert!(validate(&Validatable::number(3.0).min(1.0).max(5.0)));
    assert!(!validate(&Validatable::number(6.0).min(1.0).max(5.0)));
    assert!(validate(&Validatable::number(1.0).min(1.0).max(5.0)));
}

#[test]
fn value_conversions_pick_the_right_kind() {
    assert_eq!(FieldValue::from("x"), FieldValue::Text("x".to_string()));
    assert_eq!(FieldValue::from(3_u32), FieldValue::Number(3.0));
    assert!(validate(&Validatable::new(4_u32).min(1.0).max(5.0)));
    assert!(validate(&Validatable::new("abcdef").min(10.0)));
}
