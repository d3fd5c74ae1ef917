//! Service providers grid.

use leptos::prelude::*;
use leptos_router::components::A;

use super::resource::{DeleteConfirm, ListToolbar, use_resource_list};
use crate::net::resource::PROVIDERS;
use crate::net::types::Provider;
use crate::util::format::format_rating;

#[component]
pub fn ProvidersPage() -> impl IntoView {
    let list = use_resource_list::<Provider>(&PROVIDERS, Vec::new());

    let cards = move || {
        list.state
            .with(|s| s.filtered())
            .into_iter()
            .map(|provider| {
                let id = provider.id.clone();
                let busy_id = id.clone();
                let busy = move || list.state.with(|s| s.is_processing(&busy_id));
                let location = [provider.city.as_str(), provider.state.as_str()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                view! {
                    <article class="card">
                        {provider.logo.clone().map(|src| view! { <img class="card__logo" src=src alt="" /> })}
                        <div class="card__body">
                            <h3 class="card__title">
                                {provider.name.clone()}
                                {(!provider.is_active).then_some(" (inactive)")}
                            </h3>
                            <p class="card__meta">{location}</p>
                            <p class="card__text">{provider.description.clone()}</p>
                            <p class="card__meta">
                                {format_rating(provider.rating)}
                                {provider.total_reviews.map(|n| format!(" · {n} reviews"))}
                            </p>
                            <p class="card__tags">{provider.specialties.join(" · ")}</p>
                        </div>
                        <div class="card__actions">
                            <A href=format!("/providers/{id}/services") attr:class="btn">"Services"</A>
                            <A href=PROVIDERS.edit_route(&id) attr:class="btn">"Edit"</A>
                            <button class="btn btn--danger" disabled=busy on:click=move |_| list.request_delete(&id)>
                                "Delete"
                            </button>
                        </div>
                    </article>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="resource-page">
            <ListToolbar list=list title="Providers" placeholder="Search providers..." add_label="+ Add Provider" />
            <div class="card-grid">{cards}</div>
            <DeleteConfirm list=list />
        </section>
    }
}
