//! Singleton hero banner pages (home and cleaning).
//!
//! The page shows the create form while no banner exists, otherwise a
//! read-only preview with Edit and Delete. Saving refetches the banner.

use leptos::prelude::*;

use super::resource::{FormActions, FormImages, FormController, FormSeed, use_resource_form};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::fields::TextField;
use crate::components::metrics_editor::MetricsEditor;
use crate::config::ApiConfig;
use crate::net::types::Banner;
use crate::state::banner::{BannerKind, BannerState, BannerView};
use crate::state::drafts::{CleaningBannerDraft, HomeBannerDraft};
use crate::state::form::{FormDraft, FormStatus};
use crate::state::ui::{NoticeKind, UiState};
use crate::util::lifetime::Liveness;

#[component]
pub fn HomeBannerPage() -> impl IntoView {
    view! { <BannerPage kind=BannerKind::Home /> }
}

#[component]
pub fn CleaningBannerPage() -> impl IntoView {
    view! { <BannerPage kind=BannerKind::Cleaning /> }
}

#[component]
fn BannerPage(kind: BannerKind) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let base = StoredValue::new(use_context::<ApiConfig>().unwrap_or_default().base_url);
    let state = RwSignal::new(BannerState::default());
    let confirm_delete = RwSignal::new(false);
    let liveness = StoredValue::new(Liveness::new());
    on_cleanup(move || liveness.get_value().kill());

    let spec = kind.spec();

    let reload = Callback::new(move |()| {
        let Some(ticket) = state.try_update(BannerState::begin_load) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let base = base.get_value();
            let alive = liveness.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_collection::<Banner>(&base, spec, &[]).await;
                if !alive.is_alive() {
                    return;
                }
                match &result {
                    Ok(banners) if banners.len() > 1 => {
                        leptos::logging::warn!("{} returned {} records; showing the first", spec.label, banners.len());
                    }
                    Ok(_) => {}
                    Err(e) => leptos::logging::warn!("{} load failed: {e}", spec.label),
                }
                state.update(|s| {
                    s.finish_load(ticket, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, base, spec);
    });
    reload.run(());

    let on_saved = Callback::new(move |()| {
        state.update(BannerState::finish_save);
        ui.update(|u| {
            u.flash(NoticeKind::Success, format!("{} saved", kind.title()));
        });
        reload.run(());
    });
    let on_edit_cancel = Callback::new(move |()| state.update(BannerState::cancel_edit));

    let on_delete_confirm = Callback::new(move |()| {
        confirm_delete.set(false);
        let Some(id) = state.try_update(BannerState::begin_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let base = base.get_value();
            let alive = liveness.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_record(&base, spec, &id).await;
                if !alive.is_alive() {
                    return;
                }
                match &result {
                    Ok(()) => ui.update(|u| {
                        u.flash(NoticeKind::Success, format!("{} deleted", kind.title()));
                    }),
                    Err(e) => leptos::logging::warn!("{} delete failed: {e}", spec.label),
                }
                state.update(|s| s.finish_delete(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    // Re-render the body only when the shown banner or mode changes.
    let current = Memo::new(move |_| state.with(BannerState::view));
    let error = move || state.with(|s| s.error.clone());

    view! {
        <section class="resource-page resource-page--form">
            <h1>{kind.title()}</h1>
            {move || error().map(|message| view! { <p class="status-line status-line--error" role="alert">{message}</p> })}
            {move || match current.get() {
                BannerView::Loading => view! { <p class="status-line">"Loading..."</p> }.into_any(),
                BannerView::Create => banner_form(kind, FormSeed::Blank, on_saved, None),
                BannerView::Edit(banner) => {
                    let id = banner.id.clone();
                    banner_form(kind, FormSeed::Existing(id, banner), on_saved, Some(on_edit_cancel))
                }
                BannerView::Preview(banner) => {
                    view! {
                        <BannerPreview banner=banner />
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| state.update(BannerState::start_edit)>
                                "Edit"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || state.with(|s| s.deleting)
                                on:click=move |_| confirm_delete.set(true)
                            >
                                "Delete"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title=format!("Delete {}?", spec.label)
                    message="The page will show no banner until a new one is created."
                    on_confirm=on_delete_confirm
                    on_cancel=Callback::new(move |()| confirm_delete.set(false))
                />
            </Show>
        </section>
    }
}

fn banner_form(kind: BannerKind, seed: FormSeed<Banner>, on_saved: Callback<()>, on_cancel: Option<Callback<()>>) -> AnyView {
    match kind {
        BannerKind::Home => view! { <HomeBannerForm seed=seed on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
        BannerKind::Cleaning => {
            view! { <CleaningBannerForm seed=seed on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        }
    }
}

/// Report `Saved` to the page instead of navigating away.
fn notify_when_saved<D>(form: FormController<D>, on_saved: Callback<()>)
where
    D: FormDraft<Entity = Banner> + Send + Sync + 'static,
{
    Effect::new(move || {
        if form.state.with(|s| s.status == FormStatus::Saved) {
            on_saved.run(());
        }
    });
}

fn submit_handler<D>(form: FormController<D>) -> impl Fn(leptos::ev::SubmitEvent) + Copy
where
    D: FormDraft<Entity = Banner> + Send + Sync + 'static,
{
    move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit();
    }
}

#[component]
fn HomeBannerForm(seed: FormSeed<Banner>, on_saved: Callback<()>, on_cancel: Option<Callback<()>>) -> impl IntoView {
    let form = use_resource_form::<HomeBannerDraft>(BannerKind::Home.spec(), seed);
    notify_when_saved(form, on_saved);

    view! {
        <form class="resource-form" on:submit=submit_handler(form)>
            <TextField
                label="Title"
                required=true
                value=Signal::derive(move || form.state.with(|s| s.draft.title.clone()))
                on_input=Callback::new(move |v| form.edit(|d| d.title = v))
            />
            <TextField
                label="Subtitle"
                value=Signal::derive(move || form.state.with(|s| s.draft.subtitle.clone()))
                on_input=Callback::new(move |v| form.edit(|d| d.subtitle = v))
            />
            <TextField
                label="Button Text"
                value=Signal::derive(move || form.state.with(|s| s.draft.button_text.clone()))
                on_input=Callback::new(move |v| form.edit(|d| d.button_text = v))
            />
            <TextField
                label="Button Link"
                input_type="url"
                value=Signal::derive(move || form.state.with(|s| s.draft.button_link.clone()))
                on_input=Callback::new(move |v| form.edit(|d| d.button_link = v))
            />
            <TextField
                label="Gradient Start"
                input_type="color"
                value=Signal::derive(move || form.state.with(|s| s.draft.gradient_start.clone()))
                on_input=Callback::new(move |v| form.edit(|d| d.gradient_start = v))
            />
            <TextField
                label="Gradient End"
                input_type="color"
                value=Signal::derive(move || form.state.with(|s| s.draft.gradient_end.clone()))
                on_input=Callback::new(move |v| form.edit(|d| d.gradient_end = v))
            />
            <MetricsEditor form=form.state />
            <FormImages form=form />
            <FormActions form=form on_cancel=on_cancel />
        </form>
    }
}

#[component]
fn CleaningBannerForm(
    seed: FormSeed<Banner>,
    on_saved: Callback<()>,
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let form = use_resource_form::<CleaningBannerDraft>(BannerKind::Cleaning.spec(), seed);
    notify_when_saved(form, on_saved);

    view! {
        <form class="resource-form" on:submit=submit_handler(form)>
            <TextField
                label="Title"
                required=true
                value=Signal::derive(move || form.state.with(|s| s.draft.title.clone()))
                on_input=Callback::new(move |v| form.edit(|d| d.title = v))
            />
            <TextField
                label="Subtitle"
                value=Signal::derive(move || form.state.with(|s| s.draft.subtitle.clone()))
                on_input=Callback::new(move |v| form.edit(|d| d.subtitle = v))
            />
            <FormImages form=form />
            <FormActions form=form on_cancel=on_cancel />
        </form>
    }
}

#[component]
fn BannerPreview(banner: Banner) -> impl IntoView {
    let style = match (&banner.gradient_start, &banner.gradient_end) {
        (Some(start), Some(end)) => format!("background: linear-gradient(to bottom, {start}, {end});"),
        _ => String::new(),
    };
    let button = banner.button_text.clone().filter(|t| !t.is_empty()).map(|text| {
        let href = banner.button_link.clone().unwrap_or_else(|| "#".to_owned());
        view! { <a class="btn btn--primary" href=href>{text}</a> }
    });

    view! {
        <article class="banner-preview" style=style>
            <div class="banner-preview__text">
                <h2>{banner.title.clone()}</h2>
                <p>{banner.subtitle.clone()}</p>
                {button}
                <ul class="banner-preview__metrics">
                    {banner
                        .metrics
                        .iter()
                        .map(|m| view! { <li><strong>{m.value.clone()}</strong> " " {m.label.clone()}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            {banner.image.clone().map(|src| view! { <img class="banner-preview__image" src=src alt="" /> })}
        </article>
    }
}
