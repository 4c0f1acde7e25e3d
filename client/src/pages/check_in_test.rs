use super::*;

#[test]
fn page_title_uses_heading_until_contacts_exist() {
    assert_eq!(page_title(Language::En, 0), "Check-in");
    assert_eq!(page_title(Language::En, 1), "1 contact");
    assert_eq!(page_title(Language::En, 4), "4 contacts");
}

#[test]
fn page_title_follows_language() {
    assert_eq!(page_title(Language::He, 0), Language::He.text(Msg::CheckInTitle));
    assert_eq!(page_title(Language::He, 2), i18n::contact_count(Language::He, 2));
}

#[test]
fn error_summary_hidden_before_first_submit() {
    let state = CheckInState::default();
    let errors = check_in::validate(&CheckInValues::default()).unwrap_err();
    assert!(!show_error_summary(&state, &errors));
}

#[test]
fn error_summary_shown_after_failed_submit() {
    let mut state = CheckInState::default();
    let errors = state.begin_submit(&CheckInValues::default()).unwrap_err();
    assert!(show_error_summary(&state, &errors));
    assert!(!show_error_summary(&state, &FieldErrors::default()));
}
