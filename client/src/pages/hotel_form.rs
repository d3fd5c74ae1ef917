//! Add/edit form for a hotel listing.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::resource::{FormActions, FormImages, FormSeed, load_failure, return_to_list_when_saved, use_resource_form};
use crate::components::fields::{CheckboxField, NumberField, TextField};
use crate::net::resource::HOTELS;
use crate::state::drafts::HotelDraft;

#[component]
pub fn HotelFormPage() -> impl IntoView {
    let id = use_params_map().with_untracked(|p| p.get("id"));
    let form = use_resource_form::<HotelDraft>(&HOTELS, id.map_or(FormSeed::Blank, FormSeed::Fetch));
    return_to_list_when_saved(form);

    let failure = Memo::new(move |_| load_failure(form));
    let heading = move || if form.state.with(|s| s.mode.is_edit()) { "Edit Hotel" } else { "Add Hotel" };
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
                                label="Location"
                                value=Signal::derive(move || form.state.with(|s| s.draft.location.clone()))
                                on_input=Callback::new(move |v| form.edit(|d| d.location = v))
                            />
                            <NumberField
                                label="Price per night (₹)"
                                value=Signal::derive(move || form.state.with(|s| s.draft.price))
                                on_input=Callback::new(move |v| form.edit(|d| d.price = v))
                            />
                            <NumberField
                                label="Capacity"
                                step="1"
                                value=Signal::derive(move || form.state.with(|s| s.draft.capacity))
                                on_input=Callback::new(move |v| form.edit(|d| d.capacity = v))
                            />
                            <TextField
                                label="Description"
                                multiline=true
                                value=Signal::derive(move || form.state.with(|s| s.draft.description.clone()))
                                on_input=Callback::new(move |v| form.edit(|d| d.description = v))
                            />
                            <TextField
                                label="Amenities"
                                placeholder="WiFi, Pool, Parking"
                                value=Signal::derive(move || form.state.with(|s| s.draft.amenities.clone()))
                                on_input=Callback::new(move |v| form.edit(|d| d.amenities = v))
                            />
                            <CheckboxField
                                label="Outside food allowed"
                                checked=Signal::derive(move || form.state.with(|s| s.draft.outside_food_allowed))
                                on_change=Callback::new(move |v| form.edit(|d| d.outside_food_allowed = v))
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
