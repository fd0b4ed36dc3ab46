//! Lead Form Component
//!
//! Create or edit one lead. Each input edits exactly one field of the draft;
//! submit validates, upserts into local storage and closes the form.

use leptos::prelude::*;

use lms_core::domain::{Lead, LeadField, GENDERS, LEAD_STATUSES};
use lms_core::leads::{LeadForm as FormState, SubmitOutcome};

use crate::browser;
use crate::context::AppContext;
use crate::leads::{lead_service, LEAD_IDS};

/// Input element type for a field
fn input_type(field: LeadField) -> &'static str {
    match field {
        LeadField::Email => "email",
        LeadField::DateOfBirth | LeadField::NextFollowUpDate => "date",
        _ => "text",
    }
}

/// Lead form (create when `existing` is None, edit otherwise)
#[component]
pub fn LeadForm(
    #[prop(optional)] existing: Option<Lead>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = RwSignal::new(match existing {
        Some(lead) => FormState::edit(lead),
        None => FormState::create(&LEAD_IDS),
    });
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let service = lead_service();
        match form.try_update(|f| f.submit(&service, &LEAD_IDS)) {
            Some(Ok(outcome)) => {
                set_error.set(None);
                if let SubmitOutcome::Created(_) = outcome {
                    browser::alert(outcome.message());
                }
                ctx.reload_leads();
                on_close.run(());
            }
            Some(Err(e)) => {
                log::warn!("[LeadForm] {}", e);
                set_error.set(Some(e.to_string()));
            }
            None => {}
        }
    };

    view! {
        <div class="form-container p-6 bg-white rounded shadow-md">
            <h2 class="text-xl font-semibold text-gray-800 mb-6">
                {move || form.with(|f| f.title())}
            </h2>
            <form on:submit=on_submit class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <FieldInput form=form field=LeadField::FullName />
                <FieldInput form=form field=LeadField::Email>
                    <span class="text-gray-600 text-sm inline-block mt-1">
                        "We'll never share your email with anyone else."
                    </span>
                </FieldInput>
                <FieldInput form=form field=LeadField::PhoneNumber />
                <FieldSelect form=form field=LeadField::LeadStatus options=LEAD_STATUSES />
                <FieldSelect form=form field=LeadField::Gender options=GENDERS />
                <FieldInput form=form field=LeadField::DateOfBirth />
                <FieldInput form=form field=LeadField::Address class="col-span-1 lg:col-span-3" />
                <FieldInput form=form field=LeadField::InsuranceType />
                <FieldInput form=form field=LeadField::PolicyNumber />
                <FieldInput form=form field=LeadField::CoverageAmount />
                <FieldInput form=form field=LeadField::PreferredPlan />
                <FieldInput form=form field=LeadField::NextFollowUpDate />
                <FieldInput form=form field=LeadField::Source />
                <FieldInput form=form field=LeadField::CompanyName />
                <FieldInput form=form field=LeadField::Referrer />

                <div class="col-span-1 lg:col-span-3">
                    <label class="block text-sm font-medium text-gray-700 mb-1">
                        {LeadField::Notes.label()}
                    </label>
                    <textarea
                        name=LeadField::Notes.as_str()
                        placeholder="Enter Notes"
                        class="form-input w-full"
                        prop:value=move || form.with(|f| f.draft().notes.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_field(LeadField::Notes, value));
                        }
                    ></textarea>
                </div>

                {move || error.get().map(|msg| view! {
                    <p class="col-span-1 lg:col-span-3 text-red-600 text-sm font-medium">{msg}</p>
                })}

                <div class="col-span-1 lg:col-span-3 flex justify-end space-x-3">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        {move || form.with(|f| f.submit_label())}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Labeled input bound to one draft field
#[component]
fn FieldInput(
    form: RwSignal<FormState>,
    field: LeadField,
    #[prop(optional, into)] class: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let kind = input_type(field);
    let placeholder = if kind == "date" { String::new() } else { format!("Enter {}", field.label()) };

    view! {
        <div class=class>
            <label class="block text-sm font-medium text-gray-700 mb-1">{field.label()}</label>
            <input
                type=kind
                name=field.as_str()
                placeholder=placeholder
                class="form-input w-full"
                required=field.is_required()
                prop:value=move || form.with(|f| f.draft().field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_field(field, value));
                }
            />
            {children.map(|c| c())}
        </div>
    }
}

/// Labeled select bound to one draft field
#[component]
fn FieldSelect(
    form: RwSignal<FormState>,
    field: LeadField,
    options: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{field.label()}</label>
            <select
                name=field.as_str()
                class="form-select w-full"
                required=field.is_required()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_field(field, value));
                }
            >
                <option value="">{format!("Select {}", field.label())}</option>
                {options.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option
                            value=option
                            prop:selected=move || form.with(|f| f.draft().field(field) == option)
                        >
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
