use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: " Asha Rao ".to_owned(),
        email: "asha@rooman.net".to_owned(),
        company: "  ".to_owned(),
        message: "We need a cloud migration plan.\n".to_owned(),
    }
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_ordinary_addresses() {
    for raw in ["a@b.co", "first.last+tag@mail.example.org", "x@sub.domain.in"] {
        assert!(looks_like_email(raw), "{raw}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for raw in ["plain", "@b.co", "a@", "a@b", "a@.co", "a@b.", "a@@b.co", "a b@c.co", "a@b..co"] {
        assert!(!looks_like_email(raw), "{raw}");
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_is_trimmed() {
    let submission = filled().validate().unwrap();
    assert_eq!(submission.name, "Asha Rao");
    assert_eq!(submission.company, None);
    assert_eq!(submission.message, "We need a cloud migration plan.");
}

#[test]
fn errors_follow_field_order() {
    let mut form = ContactForm::default();
    assert_eq!(form.validate(), Err(ContactFormError::MissingName));
    form.name = "Asha".to_owned();
    assert_eq!(form.validate(), Err(ContactFormError::MissingEmail));
    form.email = "asha".to_owned();
    assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail));
    form.email = "asha@rooman.net".to_owned();
    assert_eq!(form.validate(), Err(ContactFormError::MissingMessage));
    form.message = "hi".to_owned();
    form.company = "Rooman".to_owned();
    assert_eq!(form.validate().map(|s| s.company), Ok(Some("Rooman".to_owned())));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_clears_fields_on_success() {
    let mut form = filled();
    assert!(form.submit().is_ok());
    assert_eq!(form, ContactForm::default());
}

#[test]
fn submit_keeps_fields_on_error() {
    let mut form = filled();
    form.email = "not-an-email".to_owned();
    assert_eq!(form.submit(), Err(ContactFormError::InvalidEmail));
    assert_eq!(form.name, " Asha Rao ");
    assert_eq!(ContactFormError::InvalidEmail.to_string(), "Please enter a valid email address.");
}
