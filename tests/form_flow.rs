use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fieldstate::{DocumentFormat, parse_form_definition, prelude::*};
use serde_json::json;

fn signup_form() -> FormState {
    parse_form_definition(
        r#"{
            "fields": [
                {"id": "name", "label": "Name"},
                {"id": "phone", "label": "Phone", "kind": "phone", "max_length": 10},
                {"id": "note", "label": "Note", "optional": true}
            ]
        }"#,
        DocumentFormat::Json,
    )
    .expect("definition")
    .build()
    .expect("form")
}

fn type_text(form: &mut FormState, text: &str) {
    for ch in text.chars() {
        form.handle_key(&KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
    }
}

#[test]
fn enter_walks_fields_then_finishes() {
    let mut form = signup_form();
    form.focus(0);
    assert_eq!(form.ime_action(), Some(ImeAction::Next));
    assert_eq!(form.ime_action(), Some(ImeAction::Next));
    assert_eq!(form.focused_index(), Some(2));
    assert_eq!(form.ime_action(), Some(ImeAction::Done));
    assert_eq!(form.focused_index(), None);
    assert_eq!(form.error_count(), 2, "name and phone were visited empty");
}

#[test]
fn phone_growth_is_capped_but_deletions_pass() {
    let mut form = signup_form();
    form.focus(1);
    type_text(&mut form, "98765432109999");
    assert_eq!(form.field("phone").map(FieldState::text), Some("9876543210"));
    form.handle_key(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    assert_eq!(form.field("phone").map(FieldState::text), Some("987654321"));
}

#[test]
fn full_submission() {
    let mut form = signup_form();
    form.focus(0);
    type_text(&mut form, "Ada");
    form.focus_next_field();
    type_text(&mut form, "9876543210");
    match form.submit() {
        SubmitOutcome::Valid(values) => {
            assert_eq!(
                values,
                json!({"name": "Ada", "phone": "9876543210", "note": ""})
            );
        }
        other => panic!("unexpected {other:?}"),
    }
}
