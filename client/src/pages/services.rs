//! Cleaning services list.

use leptos::prelude::*;
use leptos_router::components::A;

use super::resource::{DeleteConfirm, ListController, ListToolbar, use_resource_list};
use crate::net::resource::SERVICES;
use crate::net::types::Service;
use crate::util::format::format_price;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let list = use_resource_list::<Service>(&SERVICES, Vec::new());

    view! {
        <section class="resource-page">
            <ListToolbar
                list=list
                title="Cleaning Services"
                placeholder="Search services..."
                add_label="+ Add Service"
            />
            <ServiceGrid list=list />
            <DeleteConfirm list=list />
        </section>
    }
}

/// Card grid of the list's filtered services with edit and delete actions.
#[component]
pub(crate) fn ServiceGrid(list: ListController<Service>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {move || {
                list.state
                    .with(|s| s.filtered())
                    .into_iter()
                    .map(|service| view! { <ServiceCard service=service list=list /> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ServiceCard(service: Service, list: ListController<Service>) -> impl IntoView {
    let id = service.id.clone();
    let busy_id = id.clone();
    let busy = Memo::new(move |_| list.state.with(|s| s.is_processing(&busy_id)));
    let cover = service.images.first().cloned();
    let provider_name = service.provider.as_ref().and_then(|p| p.name()).map(str::to_owned);
    let duration = service.duration.map(|h| format!("{} hr", crate::util::format::format_number(Some(h))));

    view! {
        <article class="card">
            {cover.map(|src| view! { <img class="card__image" src=src alt="" /> })}
            <div class="card__body">
                <h3 class="card__title">{service.name.clone()}</h3>
                <p class="card__price">{format_price(service.price)}</p>
                <p class="card__text">{service.description.clone()}</p>
                <p class="card__meta">
                    {duration}
                    {(!service.category.is_empty()).then(|| format!(" · {}", service.category))}
                    {provider_name.map(|name| format!(" · {name}"))}
                    {(!service.active).then_some(" · inactive")}
                </p>
            </div>
            <div class="card__actions">
                <A href=SERVICES.edit_route(&id) attr:class="btn">"Edit"</A>
                <button
                    class="btn btn--danger"
                    disabled=move || busy.get()
                    on:click=move |_| list.request_delete(&id)
                >
                    {move || if busy.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </article>
    }
}
