use super::*;

fn valid_values() -> CheckInValues {
    CheckInValues {
        first_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "correct horse".to_owned(),
        confirm_password: "correct horse".to_owned(),
        ..CheckInValues::default()
    }
}

// =============================================================
// defaults
// =============================================================

#[test]
fn defaults_match_initial_form() {
    let values = CheckInValues::default();
    assert_eq!(values.role, Role::Designer);
    assert_eq!(values.contact_method, ContactMethod::Email);
    assert_eq!(values.experience, "3");
    assert_eq!(values.guests, "1");
    assert!(!values.subscribe);
}

// =============================================================
// validate
// =============================================================

#[test]
fn valid_values_pass() {
    assert_eq!(validate(&valid_values()), Ok(()));
}

#[test]
fn empty_form_reports_required_fields() {
    let errors = validate(&CheckInValues::default()).unwrap_err();
    assert_eq!(errors.get(Field::FirstName), Some(FieldError::FirstNameRequired));
    assert_eq!(errors.get(Field::Email), Some(FieldError::EmailRequired));
    assert_eq!(errors.get(Field::Password), Some(FieldError::PasswordTooShort));
    assert_eq!(errors.get(Field::ConfirmPassword), Some(FieldError::ConfirmRequired));
    assert_eq!(errors.get(Field::LastName), None);
    assert_eq!(errors.get(Field::Website), None);
}

#[test]
fn mismatched_confirmation_errors_on_confirmation_field() {
    let values = CheckInValues {
        confirm_password: "different!".to_owned(),
        ..valid_values()
    };
    let errors = validate(&values).unwrap_err();
    assert_eq!(errors.0.len(), 1);
    assert_eq!(errors.get(Field::ConfirmPassword), Some(FieldError::ConfirmMismatch));
    assert_eq!(errors.get(Field::Password), None);
}

#[test]
fn email_shape_is_checked() {
    for bad in ["ada", "ada@", "@example.com", "ada@example", ".ada@example.com", "a..b@example.com", "ada @example.com"] {
        let values = CheckInValues { email: bad.to_owned(), ..valid_values() };
        assert_eq!(
            validate(&values).unwrap_err().get(Field::Email),
            Some(FieldError::EmailInvalid),
            "{bad}"
        );
    }
    for good in ["ada@example.com", "a.b+tag@mail.example.co", "o'neil@example.org"] {
        assert!(is_email(good), "{good}");
    }
}

#[test]
fn password_needs_eight_characters() {
    let values = CheckInValues {
        password: "short".to_owned(),
        confirm_password: "short".to_owned(),
        ..valid_values()
    };
    let errors = validate(&values).unwrap_err();
    assert_eq!(errors.get(Field::Password), Some(FieldError::PasswordTooShort));
    assert_eq!(errors.get(Field::ConfirmPassword), None);
}

#[test]
fn numeric_ranges_are_enforced() {
    let cases = [
        ("-1", "1", Field::Experience, Some(FieldError::ExperienceMin)),
        ("11", "1", Field::Experience, Some(FieldError::ExperienceMax)),
        ("abc", "1", Field::Experience, Some(FieldError::ExperienceMin)),
        ("10", "1", Field::Experience, None),
        ("0", "0", Field::Guests, Some(FieldError::GuestsMin)),
        ("0", "", Field::Guests, Some(FieldError::GuestsMin)),
        ("0", "11", Field::Guests, Some(FieldError::GuestsMax)),
        ("0", "10", Field::Guests, None),
    ];
    for (experience, guests, field, expected) in cases {
        let values = CheckInValues {
            experience: experience.to_owned(),
            guests: guests.to_owned(),
            ..valid_values()
        };
        let actual = validate(&values).err().and_then(|e| e.get(field));
        assert_eq!(actual, expected, "experience={experience} guests={guests}");
    }
}

#[test]
fn website_must_be_url_or_empty() {
    let ok = CheckInValues { website: "https://example.com/me".to_owned(), ..valid_values() };
    assert_eq!(validate(&ok), Ok(()));

    let blank = CheckInValues { website: "   ".to_owned(), ..valid_values() };
    assert_eq!(validate(&blank), Ok(()));

    let bad = CheckInValues { website: "example dot com".to_owned(), ..valid_values() };
    assert_eq!(validate(&bad).unwrap_err().get(Field::Website), Some(FieldError::WebsiteInvalid));
}

#[test]
fn coerce_number_treats_blank_as_zero() {
    assert_eq!(coerce_number(""), Some(0.0));
    assert_eq!(coerce_number(" 4 "), Some(4.0));
    assert_eq!(coerce_number("NaN"), None);
    assert_eq!(coerce_number("x"), None);
}

// =============================================================
// submit flow
// =============================================================

#[test]
fn submit_with_mismatch_adds_no_contact() {
    let mut state = CheckInState::default();
    let values = CheckInValues { confirm_password: "nope".to_owned(), ..valid_values() };

    assert!(state.begin_submit(&values).is_err());
    assert!(state.contacts.is_empty());
    assert!(!state.submitting);
    assert!(state.revalidate_on_change());
}

#[test]
fn successful_submit_prepends_trimmed_contact() {
    let mut state = CheckInState::default();
    assert!(!state.revalidate_on_change());

    let first = CheckInValues { first_name: "  Ada ".to_owned(), email: " ada@example.com ".to_owned(), ..valid_values() };
    state.begin_submit(&first).unwrap();
    assert!(state.submitting);
    state.finish_submit(Contact::from_values("c1".to_owned(), &first));

    let second = CheckInValues { first_name: "Grace".to_owned(), last_name: "Hopper".to_owned(), ..valid_values() };
    state.begin_submit(&second).unwrap();
    state.finish_submit(Contact::from_values("c2".to_owned(), &second));

    assert_eq!(state.contacts.len(), 2);
    assert_eq!(state.contacts[0].display_name(), "Grace Hopper");
    assert_eq!(state.contacts[1].first_name, "Ada");
    assert_eq!(state.contacts[1].email, "ada@example.com");
    assert_eq!(state.contacts[1].display_name(), "Ada");
    assert!(!state.submitting);
    assert_eq!(state.submit_count, 0);
    assert!(!state.revalidate_on_change());
}

#[test]
fn contact_omits_secrets_when_serialized() {
    let contact = Contact::from_values("c1".to_owned(), &valid_values());
    let json = serde_json::to_value(&contact).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["guests"], 1.0);
}

// =============================================================
// drafts
// =============================================================

#[test]
fn draft_excludes_password_fields() {
    let draft = CheckInDraft::from(&valid_values());
    let json = serde_json::to_value(&draft).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("confirmPassword").is_none());
    assert_eq!(json["email"], "ada@example.com");
}

#[test]
fn draft_round_trip_restores_everything_but_secrets() {
    let values = CheckInValues {
        role: Role::Engineer,
        contact_method: ContactMethod::Sms,
        subscribe: true,
        guests: "4".to_owned(),
        ..valid_values()
    };
    let json = serde_json::to_value(CheckInDraft::from(&values)).unwrap();
    let restored = CheckInValues::from_draft(&json);

    assert_eq!(restored.role, Role::Engineer);
    assert_eq!(restored.contact_method, ContactMethod::Sms);
    assert!(restored.subscribe);
    assert_eq!(restored.guests, "4");
    assert_eq!(restored.first_name, "Ada");
    assert!(restored.password.is_empty());
    assert!(restored.confirm_password.is_empty());
}

#[test]
fn draft_merge_skips_mistyped_fields() {
    let json = serde_json::json!({
        "firstName": 42,
        "email": "ada@example.com",
        "role": "astronaut",
        "experience": 7,
        "subscribe": "yes",
        "password": "leaked-secret"
    });
    let restored = CheckInValues::from_draft(&json);
    assert_eq!(restored.first_name, "");
    assert_eq!(restored.email, "ada@example.com");
    assert_eq!(restored.role, Role::Designer);
    assert_eq!(restored.experience, "7");
    assert!(!restored.subscribe);
    assert!(restored.password.is_empty());
}

#[test]
fn non_object_draft_yields_defaults() {
    assert_eq!(CheckInValues::from_draft(&serde_json::json!([1, 2])), CheckInValues::default());
}
