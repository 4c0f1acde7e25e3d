//! Check-in form page.
//!
//! ARCHITECTURE
//! ============
//! Inputs bind to a single `RwSignal<CheckInValues>`. Every edit persists a
//! password-free draft and, once a submit has been attempted, revalidates the
//! whole form. A valid submit waits for the simulated request, prepends the
//! contact, resets the form, and raises a success toast.

#[cfg(test)]
#[path = "check_in_test.rs"]
mod check_in_test;

use leptos::prelude::*;

use crate::config::storage_keys;
use crate::i18n::{self, Language, Msg};
use crate::state::check_in::{
    self, CheckInDraft, CheckInState, CheckInValues, Contact, ContactMethod, Field, FieldErrors, Role,
};
use crate::state::notifications::NotificationInput;
use crate::state::stores::{LocaleStore, Notifier};
use crate::util::{document, storage};

const CONTACT_SAVED_TIMEOUT_MS: u32 = 3000;

type Getter = fn(&CheckInValues) -> String;
type Setter = fn(&mut CheckInValues, String);

/// Document title: the contact counter once contacts exist, else the page
/// heading.
fn page_title(lang: Language, contacts: usize) -> String {
    if contacts == 0 {
        lang.text(Msg::CheckInTitle).to_owned()
    } else {
        i18n::contact_count(lang, contacts)
    }
}

/// The summary alert is only shown after a submit attempt.
fn show_error_summary(state: &CheckInState, errors: &FieldErrors) -> bool {
    state.submit_count > 0 && !errors.is_empty()
}

/// Signal bundle shared by every input on the page.
#[derive(Clone, Copy)]
struct FormHandle {
    values: RwSignal<CheckInValues>,
    state: RwSignal<CheckInState>,
    errors: RwSignal<FieldErrors>,
    locale: LocaleStore,
}

impl FormHandle {
    fn edit(self, apply: impl FnOnce(&mut CheckInValues)) {
        self.values.update(apply);
        let current = self.values.get_untracked();
        storage::save_json(storage_keys::CHECK_IN_DRAFT, &CheckInDraft::from(&current));
        if self.state.with_untracked(CheckInState::revalidate_on_change) {
            self.errors.set(check_in::validate(&current).err().unwrap_or_default());
        }
    }

    fn error_text(self, field: Field) -> Option<&'static str> {
        let lang = self.locale.get();
        self.errors.with(|e| e.get(field)).map(|e| lang.text(e.message()))
    }

    fn is_invalid(self, field: Field) -> String {
        self.errors.with(|e| e.get(field).is_some()).to_string()
    }
}

#[component]
pub fn CheckInPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let locale = expect_context::<LocaleStore>();
    let form = FormHandle {
        values: RwSignal::new(CheckInValues::default()),
        state: RwSignal::new(CheckInState::default()),
        errors: RwSignal::new(FieldErrors::default()),
        locale,
    };
    let text = move |msg: Msg| locale.get().text(msg);

    // Restore the draft once mounted in the browser.
    Effect::new(move |_| {
        if let Some(draft) = storage::load_json::<serde_json::Value>(storage_keys::CHECK_IN_DRAFT) {
            form.values.set(CheckInValues::from_draft(&draft));
        }
    });

    Effect::new(move |_| {
        let count = form.state.with(|s| s.contacts.len());
        document::set_title(&page_title(locale.get(), count));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.values.get_untracked();
        match form.state.try_update(|s| s.begin_submit(&current)) {
            Some(Ok(())) => {
                form.errors.set(FieldErrors::default());
                leptos::task::spawn_local(async move {
                    #[cfg(feature = "hydrate")]
                    {
                        let delay = u64::from(crate::config::CHECK_IN_SUBMIT_DELAY_MS);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
                    }
                    let contact = Contact::from_values(uuid::Uuid::new_v4().to_string(), &current);
                    log::debug!("check-in submitted: contact_id={}", contact.id);
                    if form.state.try_update(|s| s.finish_submit(contact)).is_none() {
                        return;
                    }
                    form.values.set(CheckInValues::default());
                    storage::remove(storage_keys::CHECK_IN_DRAFT);
                    notifier.notify(
                        NotificationInput::success(locale.get_untracked().text(Msg::ContactSaved))
                            .with_timeout(CONTACT_SAVED_TIMEOUT_MS),
                    );
                });
            }
            Some(Err(errors)) => form.errors.set(errors),
            None => {}
        }
    };

    let contacts = move || form.state.with(|s| s.contacts.clone());

    view! {
        <section class="card">
            <div class="heading-row">
                <h2>{move || text(Msg::CheckInTitle)}</h2>
                <span class="contact-count">
                    {move || i18n::contact_count(locale.get(), form.state.with(|s| s.contacts.len()))}
                </span>
            </div>
            <p class="muted">{move || text(Msg::CheckInSubtitle)}</p>
            <p class="muted small">{move || text(Msg::RequiredNote)}</p>

            <form class="form" novalidate=true on:submit=on_submit>
                <Show when=move || form.state.with(|s| form.errors.with(|e| show_error_summary(s, e)))>
                    <div class="form-error" role="alert">{move || text(Msg::ErrorsHeading)}</div>
                </Show>

                <TextField
                    form
                    field=Field::FirstName
                    input_type="text"
                    label=Msg::FirstNameLabel
                    placeholder=Msg::FirstNamePlaceholder
                    required=true
                    get=|v| v.first_name.clone()
                    set=|v, s| v.first_name = s
                />
                <TextField
                    form
                    field=Field::LastName
                    input_type="text"
                    label=Msg::LastNameLabel
                    placeholder=Msg::LastNamePlaceholder
                    get=|v| v.last_name.clone()
                    set=|v, s| v.last_name = s
                />
                <TextField
                    form
                    field=Field::Email
                    input_type="email"
                    label=Msg::EmailLabel
                    placeholder=Msg::EmailPlaceholder
                    required=true
                    get=|v| v.email.clone()
                    set=|v, s| v.email = s
                />
                <TextField
                    form
                    field=Field::Phone
                    input_type="tel"
                    label=Msg::PhoneLabel
                    placeholder=Msg::PhonePlaceholder
                    get=|v| v.phone.clone()
                    set=|v, s| v.phone = s
                />
                <TextField
                    form
                    field=Field::Password
                    input_type="password"
                    label=Msg::PasswordLabel
                    placeholder=Msg::PasswordPlaceholder
                    required=true
                    get=|v| v.password.clone()
                    set=|v, s| v.password = s
                />
                <TextField
                    form
                    field=Field::ConfirmPassword
                    input_type="password"
                    label=Msg::ConfirmPasswordLabel
                    placeholder=Msg::ConfirmPasswordPlaceholder
                    required=true
                    get=|v| v.confirm_password.clone()
                    set=|v, s| v.confirm_password = s
                />
                <TextField
                    form
                    field=Field::Company
                    input_type="text"
                    label=Msg::CompanyLabel
                    placeholder=Msg::CompanyPlaceholder
                    get=|v| v.company.clone()
                    set=|v, s| v.company = s
                />

                <div class="field">
                    <label for=Field::Role.input_id()>
                        {move || text(Msg::RoleLabel)}
                        <span class="field-tag">{move || text(Msg::Optional)}</span>
                    </label>
                    <select
                        id=Field::Role.input_id()
                        prop:value=move || form.values.with(|v| v.role.as_str())
                        on:change=move |ev| {
                            if let Some(role) = Role::from_value(&event_target_value(&ev)) {
                                form.edit(|v| v.role = role);
                            }
                        }
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|role| view! { <option value=role.as_str()>{move || text(role.label())}</option> })
                            .collect_view()}
                    </select>
                </div>

                <fieldset class="field field--full">
                    <legend>
                        {move || text(Msg::ContactMethodLegend)}
                        <span class="field-tag field-tag--required">{move || text(Msg::Required)}</span>
                    </legend>
                    <div class="choice-group">
                        {ContactMethod::ALL
                            .into_iter()
                            .map(|method| {
                                let id = format!("contact-{}", method.as_str());
                                let label_for = id.clone();
                                view! {
                                    <label class="choice-row choice-custom" for=label_for>
                                        <input
                                            id=id
                                            class="visually-hidden"
                                            type="radio"
                                            name="contactMethod"
                                            value=method.as_str()
                                            prop:checked=move || form.values.with(|v| v.contact_method == method)
                                            on:change=move |_| form.edit(|v| v.contact_method = method)
                                        />
                                        <span class="choice-control" aria-hidden="true"></span>
                                        <span>{move || text(method.label())}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </fieldset>

                <div class="field">
                    <label class="choice-row choice-custom" for=Field::Subscribe.input_id()>
                        <input
                            id=Field::Subscribe.input_id()
                            class="visually-hidden"
                            type="checkbox"
                            prop:checked=move || form.values.with(|v| v.subscribe)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.edit(|v| v.subscribe = checked);
                            }
                        />
                        <span class="choice-control" aria-hidden="true"></span>
                        <span>{move || text(Msg::SubscribeLabel)}</span>
                    </label>
                </div>

                <div class="field field--full">
                    <label for=Field::Experience.input_id()>
                        {move || text(Msg::ExperienceLabel)}
                        " "
                        <span class="muted">{move || text(Msg::ExperienceRangeHint)}</span>
                        <span class="field-tag field-tag--required">{move || text(Msg::Required)}</span>
                    </label>
                    <input
                        id=Field::Experience.input_id()
                        type="range"
                        min="0"
                        max="10"
                        aria-required="true"
                        aria-invalid=move || form.is_invalid(Field::Experience)
                        prop:value=move || form.values.with(|v| v.experience.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            form.edit(|v| v.experience = raw);
                        }
                    />
                    <FieldErrorText form field=Field::Experience/>
                </div>

                <div class="field field--full">
                    <label for=Field::Bio.input_id()>
                        {move || text(Msg::BioLabel)}
                        <span class="field-tag">{move || text(Msg::Optional)}</span>
                    </label>
                    <textarea
                        id=Field::Bio.input_id()
                        rows="4"
                        placeholder=move || text(Msg::BioPlaceholder)
                        prop:value=move || form.values.with(|v| v.bio.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            form.edit(|v| v.bio = raw);
                        }
                    ></textarea>
                </div>

                <TextField
                    form
                    field=Field::Website
                    input_type="url"
                    label=Msg::WebsiteLabel
                    placeholder=Msg::WebsitePlaceholder
                    get=|v| v.website.clone()
                    set=|v, s| v.website = s
                />
                <TextField
                    form
                    field=Field::StartDate
                    input_type="date"
                    label=Msg::StartDateLabel
                    get=|v| v.start_date.clone()
                    set=|v, s| v.start_date = s
                />
                <TextField
                    form
                    field=Field::Guests
                    input_type="number"
                    label=Msg::GuestsLabel
                    required=true
                    get=|v| v.guests.clone()
                    set=|v, s| v.guests = s
                />

                <button type="submit" disabled=move || form.state.with(|s| s.submitting)>
                    {move || {
                        if form.state.with(|s| s.submitting) {
                            text(Msg::SavingContact)
                        } else {
                            text(Msg::SaveContact)
                        }
                    }}
                </button>
            </form>

            <Show when=move || form.state.with(|s| !s.contacts.is_empty())>
                <ul class="contact-list">
                    <For
                        each=contacts
                        key=|contact| contact.id.clone()
                        children=move |contact| {
                            let phone = (!contact.phone.is_empty()).then(|| format!(" · {}", contact.phone));
                            view! {
                                <li>
                                    <div>
                                        <strong>{contact.display_name()}</strong>
                                        <div class="muted small">
                                            <span>{contact.email.clone()}</span>
                                            {phone.map(|p| view! { <span>{p}</span> })}
                                        </div>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}

/// Labelled single-line input bound to one `CheckInValues` field.
#[component]
fn TextField(
    form: FormHandle,
    field: Field,
    input_type: &'static str,
    label: Msg,
    #[prop(optional)] placeholder: Option<Msg>,
    #[prop(optional)] required: bool,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    let locale = form.locale;
    let text = move |msg: Msg| locale.get().text(msg);
    let tag_class = if required { "field-tag field-tag--required" } else { "field-tag" };
    let tag = if required { Msg::Required } else { Msg::Optional };

    view! {
        <div class="field">
            <label for=field.input_id()>
                {move || text(label)}
                <span class=tag_class>{move || text(tag)}</span>
            </label>
            <input
                id=field.input_id()
                type=input_type
                aria-required=required.then_some("true")
                aria-invalid=move || form.is_invalid(field)
                placeholder=move || placeholder.map(text)
                prop:value=move || form.values.with(get)
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    form.edit(|v| set(v, raw));
                }
            />
            <FieldErrorText form field/>
        </div>
    }
}

#[component]
fn FieldErrorText(form: FormHandle, field: Field) -> impl IntoView {
    move || form.error_text(field).map(|message| view! { <p class="field-error">{message}</p> })
}
