//! Add/edit form for a cleaning service, including the provider picker.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::resource::{FormActions, FormImages, FormSeed, load_failure, return_to_list_when_saved, use_resource_form};
use crate::components::fields::{NumberField, TextField};
use crate::net::resource::SERVICES;
use crate::net::types::Provider;
use crate::state::drafts::ServiceDraft;
use crate::util::lifetime::Liveness;

#[component]
pub fn ServiceFormPage() -> impl IntoView {
    let id = use_params_map().with_untracked(|p| p.get("id"));
    let seed = id.map_or(FormSeed::Blank, FormSeed::Fetch);
    let form = use_resource_form::<ServiceDraft>(&SERVICES, seed);
    return_to_list_when_saved(form);

    let providers = RwSignal::new(Vec::<Provider>::new());
    let liveness = Liveness::new();
    let cleanup_flag = liveness.clone();
    on_cleanup(move || cleanup_flag.kill());

    #[cfg(feature = "hydrate")]
    {
        let base = use_context::<crate::config::ApiConfig>().unwrap_or_default().base_url;
        leptos::task::spawn_local(async move {
            let query = [("isActive", "true".to_owned())];
            let result =
                crate::net::api::fetch_collection::<Provider>(&base, &crate::net::resource::PROVIDERS, &query).await;
            if !liveness.is_alive() {
                return;
            }
            match result {
                Ok(found) => providers.set(found),
                Err(e) => leptos::logging::warn!("provider picker load failed: {e}"),
            }
        });
    }

    let failure = Memo::new(move |_| load_failure(form));
    let draft = move || form.state.with(|s| s.draft.clone());
    let heading = move || if form.state.with(|s| s.mode.is_edit()) { "Edit Service" } else { "Add Service" };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    };
    let provider_options = move || {
        let selected = form.state.with(|s| s.draft.provider.clone()).unwrap_or_default();
        providers
            .get()
            .into_iter()
            .map(|p| {
                let is_selected = p.id == selected;
                view! {
                    <option value=p.id selected=is_selected>
                        {p.name}
                    </option>
                }
            })
            .collect::<Vec<_>>()
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
                                value=Signal::derive(move || draft().name)
                                on_input=Callback::new(move |v| form.edit(|d| d.name = v))
                            />
                            <TextField
                                label="Description"
                                multiline=true
                                value=Signal::derive(move || draft().description)
                                on_input=Callback::new(move |v| form.edit(|d| d.description = v))
                            />
                            <NumberField
                                label="Price (₹)"
                                required=true
                                value=Signal::derive(move || draft().price)
                                on_input=Callback::new(move |v| form.edit(|d| d.price = v))
                            />
                            <NumberField
                                label="Duration (hours)"
                                value=Signal::derive(move || draft().duration)
                                on_input=Callback::new(move |v| form.edit(|d| d.duration = v))
                            />
                            <TextField
                                label="Category"
                                value=Signal::derive(move || draft().category)
                                on_input=Callback::new(move |v| form.edit(|d| d.category = v))
                            />
                            <label class="dialog__label">
                                "Provider"
                                <select
                                    class="dialog__input"
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.edit(|d| d.provider = (!value.is_empty()).then_some(value));
                                    }
                                >
                                    <option value="">"No provider"</option>
                                    {provider_options}
                                </select>
                            </label>
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
