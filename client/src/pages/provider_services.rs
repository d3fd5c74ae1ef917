//! Services offered by one provider, with the provider as page header.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::resource::{DeleteConfirm, ListToolbar, use_resource_list};
use super::services::ServiceGrid;
use crate::net::resource::SERVICES;
use crate::net::types::{Provider, Service};
use crate::util::lifetime::Liveness;

#[component]
pub fn ProviderServicesPage() -> impl IntoView {
    let params = use_params_map();
    let provider_id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    let list = use_resource_list::<Service>(&SERVICES, vec![("providerId", provider_id.clone())]);
    let provider = RwSignal::new(None::<Provider>);

    let liveness = Liveness::new();
    let cleanup_flag = liveness.clone();
    on_cleanup(move || cleanup_flag.kill());

    #[cfg(feature = "hydrate")]
    {
        let base = use_context::<crate::config::ApiConfig>().unwrap_or_default().base_url;
        let id = provider_id.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_record::<Provider>(&base, &crate::net::resource::PROVIDERS, &id).await;
            if !liveness.is_alive() {
                return;
            }
            match result {
                Ok(found) => provider.set(Some(found)),
                Err(e) => leptos::logging::warn!("provider {id} load failed: {e}"),
            }
        });
    }

    let header = move || {
        provider.get().map(|p| {
            view! {
                <div class="provider-header">
                    {p.logo.clone().map(|src| view! { <img class="card__logo" src=src alt="" /> })}
                    <div>
                        <h2>{p.name.clone()}</h2>
                        <p class="card__meta">{[p.email, p.phone].into_iter().filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" · ")}</p>
                    </div>
                </div>
            }
        })
    };

    view! {
        <section class="resource-page">
            <A href="/providers" attr:class="btn">"← Providers"</A>
            {header}
            <ListToolbar list=list title="Provider Services" placeholder="Search services..." />
            <ServiceGrid list=list />
            <DeleteConfirm list=list />
        </section>
    }
}
