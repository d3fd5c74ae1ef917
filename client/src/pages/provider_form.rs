//! Add/edit form for a service provider.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::resource::{FormActions, FormImages, FormSeed, load_failure, return_to_list_when_saved, use_resource_form};
use crate::components::fields::{CheckboxField, NumberField, TextField};
use crate::net::resource::PROVIDERS;
use crate::state::drafts::ProviderDraft;

/// One plain text input of the provider form.
macro_rules! provider_text {
    ($form:expr, $label:literal, $field:ident) => {
        provider_text!($form, $label, $field, "text")
    };
    ($form:expr, $label:literal, $field:ident, $kind:literal) => {{
        let form = $form;
        view! {
            <TextField
                label=$label
                input_type=$kind
                value=Signal::derive(move || form.state.with(|s| s.draft.$field.clone()))
                on_input=Callback::new(move |v| form.edit(|d| d.$field = v))
            />
        }
    }};
}

#[component]
pub fn ProviderFormPage() -> impl IntoView {
    let id = use_params_map().with_untracked(|p| p.get("id"));
    let form = use_resource_form::<ProviderDraft>(&PROVIDERS, id.map_or(FormSeed::Blank, FormSeed::Fetch));
    return_to_list_when_saved(form);

    let failure = Memo::new(move |_| load_failure(form));
    let heading = move || if form.state.with(|s| s.mode.is_edit()) { "Edit Provider" } else { "Add Provider" };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };

    view! {
        <section class="resource-page resource-page--form">
            <h1>{heading}</h1>
            {move || match failure.get() {
                Some(message) => view! { <p class="status-line status-line--error">{message}</p> }.into_any(),
                None => {
                    view! {
                        <form class="resource-form" on:submit=on_submit>
                            <TextField
                                label="Name"
                                required=true
                                value=Signal::derive(move || form.state.with(|s| s.draft.name.clone()))
                                on_input=Callback::new(move |v| form.edit(|d| d.name = v))
                            />
                            <TextField
                                label="Description"
                                multiline=true
                                value=Signal::derive(move || form.state.with(|s| s.draft.description.clone()))
                                on_input=Callback::new(move |v| form.edit(|d| d.description = v))
                            />
                            {provider_text!(form, "Email", email, "email")}
                            {provider_text!(form, "Phone", phone, "tel")}
                            {provider_text!(form, "Address", address)}
                            {provider_text!(form, "City", city)}
                            {provider_text!(form, "State", state)}
                            {provider_text!(form, "Pincode", pincode)}
                            <NumberField
                                label="Rating"
                                step="0.1"
                                value=Signal::derive(move || form.state.with(|s| s.draft.rating))
                                on_input=Callback::new(move |v| form.edit(|d| d.rating = v))
                            />
                            <TextField
                                label="Specialties"
                                placeholder="Deep cleaning, Sofa shampoo"
                                value=Signal::derive(move || form.state.with(|s| s.draft.specialties.clone()))
                                on_input=Callback::new(move |v| form.edit(|d| d.specialties = v))
                            />
                            <CheckboxField
                                label="Active"
                                checked=Signal::derive(move || form.state.with(|s| s.draft.is_active))
                                on_change=Callback::new(move |v| form.edit(|d| d.is_active = v))
                            />
                            <FormImages form=form />
                            <FormActions form=form />
                        </form>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
