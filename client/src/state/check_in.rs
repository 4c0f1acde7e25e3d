//! Check-in form values, validation, drafts, and the in-session contact list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The check-in page binds inputs to `CheckInValues`, validates on submit
//! (and on every change after the first attempt), and appends accepted
//! contacts to `CheckInState`. Contacts never leave the browser session; only
//! the unsubmitted draft is persisted, and never its password fields.

#[cfg(test)]
#[path = "check_in_test.rs"]
mod check_in_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::i18n::Msg;

const PASSWORD_MIN_CHARS: usize = 8;
const EXPERIENCE_RANGE: (f64, f64) = (0.0, 10.0);
const GUESTS_RANGE: (f64, f64) = (1.0, 10.0);

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("valid email regex")
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Designer,
    Engineer,
    Product,
    Other,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Designer, Self::Engineer, Self::Product, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Designer => "designer",
            Self::Engineer => "engineer",
            Self::Product => "product",
            Self::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }

    pub fn label(self) -> Msg {
        match self {
            Self::Designer => Msg::RoleDesigner,
            Self::Engineer => Msg::RoleEngineer,
            Self::Product => Msg::RoleProduct,
            Self::Other => Msg::RoleOther,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Sms,
}

impl ContactMethod {
    pub const ALL: [Self; 3] = [Self::Email, Self::Phone, Self::Sms];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Sms => "sms",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }

    pub fn label(self) -> Msg {
        match self {
            Self::Email => Msg::ContactMethodEmail,
            Self::Phone => Msg::ContactMethodPhone,
            Self::Sms => Msg::ContactMethodSms,
        }
    }
}

/// Raw form values as bound to the inputs. Numeric fields keep the input
/// text and are coerced during validation.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckInValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub company: String,
    pub role: Role,
    pub contact_method: ContactMethod,
    pub subscribe: bool,
    pub experience: String,
    pub bio: String,
    pub website: String,
    pub start_date: String,
    pub guests: String,
}

impl Default for CheckInValues {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            company: String::new(),
            role: Role::Designer,
            contact_method: ContactMethod::Email,
            subscribe: false,
            experience: "3".to_owned(),
            bio: String::new(),
            website: String::new(),
            start_date: String::new(),
            guests: "1".to_owned(),
        }
    }
}

/// Form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Company,
    Role,
    ContactMethod,
    Subscribe,
    Experience,
    Bio,
    Website,
    StartDate,
    Guests,
}

impl Field {
    /// DOM id of the input.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Company => "company",
            Self::Role => "role",
            Self::ContactMethod => "contactMethod",
            Self::Subscribe => "subscribe",
            Self::Experience => "experience",
            Self::Bio => "bio",
            Self::Website => "website",
            Self::StartDate => "startDate",
            Self::Guests => "guests",
        }
    }
}

/// Field-level validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    FirstNameRequired,
    EmailRequired,
    EmailInvalid,
    PasswordTooShort,
    ConfirmRequired,
    ConfirmMismatch,
    ExperienceMin,
    ExperienceMax,
    GuestsMin,
    GuestsMax,
    WebsiteInvalid,
}

impl FieldError {
    pub fn message(self) -> Msg {
        match self {
            Self::FirstNameRequired => Msg::FirstNameRequired,
            Self::EmailRequired => Msg::EmailRequired,
            Self::EmailInvalid => Msg::EmailInvalid,
            Self::PasswordTooShort => Msg::PasswordMin,
            Self::ConfirmRequired => Msg::ConfirmPasswordRequired,
            Self::ConfirmMismatch => Msg::ConfirmPasswordMismatch,
            Self::ExperienceMin => Msg::ExperienceMin,
            Self::ExperienceMax => Msg::ExperienceMax,
            Self::GuestsMin => Msg::GuestsMin,
            Self::GuestsMax => Msg::GuestsMax,
            Self::WebsiteInvalid => Msg::WebsiteInvalid,
        }
    }
}

/// First error per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }
}

/// Validate every field.
///
/// # Errors
///
/// Returns the per-field errors when any rule fails.
pub fn validate(values: &CheckInValues) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if values.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, FieldError::FirstNameRequired);
    }

    let email = values.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !is_email(email) {
        errors.insert(Field::Email, FieldError::EmailInvalid);
    }

    if values.password.chars().count() < PASSWORD_MIN_CHARS {
        errors.insert(Field::Password, FieldError::PasswordTooShort);
    }

    if values.confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, FieldError::ConfirmRequired);
    } else if values.confirm_password != values.password {
        errors.insert(Field::ConfirmPassword, FieldError::ConfirmMismatch);
    }

    if let Err(e) = check_range(&values.experience, EXPERIENCE_RANGE, FieldError::ExperienceMin, FieldError::ExperienceMax) {
        errors.insert(Field::Experience, e);
    }
    if let Err(e) = check_range(&values.guests, GUESTS_RANGE, FieldError::GuestsMin, FieldError::GuestsMax) {
        errors.insert(Field::Guests, e);
    }

    let website = values.website.trim();
    if !website.is_empty() && url::Url::parse(website).is_err() {
        errors.insert(Field::Website, FieldError::WebsiteInvalid);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Coerce numeric input text: blank is zero, anything unparsable is `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn check_range(raw: &str, (min, max): (f64, f64), below: FieldError, above: FieldError) -> Result<f64, FieldError> {
    let value = coerce_number(raw).ok_or(below)?;
    if value < min {
        Err(below)
    } else if value > max {
        Err(above)
    } else {
        Ok(value)
    }
}

/// A saved check-in. Secrets are not kept.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: Role,
    pub contact_method: ContactMethod,
    pub subscribe: bool,
    pub experience: f64,
    pub bio: String,
    pub website: String,
    pub start_date: String,
    pub guests: f64,
}

impl Contact {
    /// Build a contact from validated values, trimming text fields.
    pub fn from_values(id: String, values: &CheckInValues) -> Self {
        Self {
            id,
            first_name: values.first_name.trim().to_owned(),
            last_name: values.last_name.trim().to_owned(),
            email: values.email.trim().to_owned(),
            phone: values.phone.trim().to_owned(),
            company: values.company.trim().to_owned(),
            role: values.role,
            contact_method: values.contact_method,
            subscribe: values.subscribe,
            experience: coerce_number(&values.experience).unwrap_or_default(),
            bio: values.bio.trim().to_owned(),
            website: values.website.trim().to_owned(),
            start_date: values.start_date.clone(),
            guests: coerce_number(&values.guests).unwrap_or_default(),
        }
    }

    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Persisted draft: every field except the password pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: Role,
    pub contact_method: ContactMethod,
    pub subscribe: bool,
    pub experience: String,
    pub bio: String,
    pub website: String,
    pub start_date: String,
    pub guests: String,
}

impl From<&CheckInValues> for CheckInDraft {
    fn from(values: &CheckInValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            company: values.company.clone(),
            role: values.role,
            contact_method: values.contact_method,
            subscribe: values.subscribe,
            experience: values.experience.clone(),
            bio: values.bio.clone(),
            website: values.website.clone(),
            start_date: values.start_date.clone(),
            guests: values.guests.clone(),
        }
    }
}

impl CheckInValues {
    /// Merge a stored draft onto the defaults field by field. Missing or
    /// mistyped fields keep their default; password fields are never read.
    pub fn from_draft(draft: &Value) -> Self {
        let mut values = Self::default();
        let Some(map) = draft.as_object() else {
            return values;
        };
        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);
        let number_text = |key: &str| match map.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        if let Some(v) = text("firstName") {
            values.first_name = v;
        }
        if let Some(v) = text("lastName") {
            values.last_name = v;
        }
        if let Some(v) = text("email") {
            values.email = v;
        }
        if let Some(v) = text("phone") {
            values.phone = v;
        }
        if let Some(v) = text("company") {
            values.company = v;
        }
        if let Some(v) = text("role").as_deref().and_then(Role::from_value) {
            values.role = v;
        }
        if let Some(v) = text("contactMethod").as_deref().and_then(ContactMethod::from_value) {
            values.contact_method = v;
        }
        if let Some(v) = map.get("subscribe").and_then(Value::as_bool) {
            values.subscribe = v;
        }
        if let Some(v) = number_text("experience") {
            values.experience = v;
        }
        if let Some(v) = text("bio") {
            values.bio = v;
        }
        if let Some(v) = text("website") {
            values.website = v;
        }
        if let Some(v) = text("startDate") {
            values.start_date = v;
        }
        if let Some(v) = number_text("guests") {
            values.guests = v;
        }
        values
    }
}

/// Contacts saved this session plus submit bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckInState {
    /// Newest first.
    pub contacts: Vec<Contact>,
    pub submit_count: u32,
    pub submitting: bool,
}

impl CheckInState {
    /// Record a submit attempt and validate.
    ///
    /// # Errors
    ///
    /// Returns the field errors when validation fails; no contact is added.
    pub fn begin_submit(&mut self, values: &CheckInValues) -> Result<(), FieldErrors> {
        self.submit_count += 1;
        validate(values)?;
        self.submitting = true;
        Ok(())
    }

    /// Store a contact once the simulated request completes. The form is
    /// reset, so change-revalidation stops until the next submit.
    pub fn finish_submit(&mut self, contact: Contact) {
        self.contacts.insert(0, contact);
        self.submitting = false;
        self.submit_count = 0;
    }

    /// Whether inputs should revalidate on change.
    pub fn revalidate_on_change(&self) -> bool {
        self.submit_count > 0
    }
}
