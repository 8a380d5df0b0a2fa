use fieldstate::prelude::*;
use fieldstate::validation::rules::PHONE_VALIDATION_REGEX;

fn focus_then_blur(field: &mut FieldState) {
    field.on_focus_change(true);
    field.on_focus_change(false);
    field.enable_show_errors();
}

#[test]
fn text_longer_than_max_is_invalid() {
    let base = input_text(None, LengthBounds::default().with_max(5), false);
    for (text, valid) in [("abcde", true), ("abcdef", false), ("abcdefghij", false)] {
        assert_eq!(base.clone().with_text(text).is_valid(), valid, "{text:?}");
    }
}

#[test]
fn text_shorter_than_min_is_invalid() {
    let base = input_text(None, LengthBounds::default().with_min(3), false);
    assert!(!base.clone().with_text("").is_valid());
    assert!(!base.clone().with_text("ab").is_valid());
    assert!(base.with_text("abc").is_valid());
}

#[test]
fn optional_empty_is_valid_regardless_of_validator() {
    let spec = fieldstate::state::FieldSpec::new(Pipeline::new(|_| false).with_optional(true), |_| {
        "never".to_string()
    });
    let field = FieldState::new(spec);
    assert!(field.is_valid());
    assert!(phone_number(None, LengthBounds::UNBOUNDED, true).is_valid());
}

#[test]
fn errors_need_focus_before_enabling() {
    let mut field = input_text(Some("Name"), LengthBounds::UNBOUNDED, false);
    field.enable_show_errors();
    assert!(!field.show_errors());
    field.on_focus_change(true);
    assert!(!field.show_errors());
    field.enable_show_errors();
    assert!(field.show_errors());
}

#[test]
fn input_text_with_min_length_reports_after_blur() {
    let mut field = input_text(None, LengthBounds::default().with_min(1), false);
    assert!(!field.is_valid());
    assert_eq!(field.error(), None);
    focus_then_blur(&mut field);
    let message = field.error().expect("error after blur");
    assert!(!message.is_empty());
}

#[test]
fn phone_number_examples() {
    let field = phone_number(None, LengthBounds::UNBOUNDED, false);
    assert!(field.clone().with_text("9876543210").is_valid());
    assert!(!field.clone().with_text("1234567890").is_valid());
    assert!(!field.with_text("9८७६५४३२१०").is_valid());
    assert_eq!(PHONE_VALIDATION_REGEX, "[6-9]{1}\\d{9}$");
}

#[test]
fn events_replay_into_same_state() {
    let events = vec![
        FieldEvent::FocusChanged(true),
        FieldEvent::TextChanged("98765".into()),
        FieldEvent::FocusChanged(false),
        FieldEvent::EnableErrors,
    ];
    let field = events.into_iter().fold(
        phone_number(Some("Phone Number"), LengthBounds::UNBOUNDED, false),
        reduce,
    );
    assert_eq!(field.text(), "98765");
    assert_eq!(
        field.error().as_deref(),
        Some("Please enter valid phone number")
    );
}

#[test]
fn regex_field_layers_pattern_over_non_empty_check() {
    let mut field = regex_text("[a-z0-9-]+")
        .with_label("Slug")
        .with_bounds(LengthBounds::default().with_max(8))
        .build()
        .expect("pattern compiles");
    assert!(!field.is_valid());
    field.set_text("my-trip");
    assert!(field.is_valid());
    field.set_text("My Trip");
    assert!(!field.is_valid());
    field.set_text("my-long-trip");
    assert!(!field.is_valid());
}
