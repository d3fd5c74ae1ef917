//! Generic list and form controllers shared by every resource page.
//!
//! ARCHITECTURE
//! ============
//! A controller couples a state model (`ListState`, `FormState`) with the
//! async REST calls for one `ResourceSpec`. Pages only supply the resource
//! spec, the entity type, and markup.
//!
//! Every controller holds a `Liveness` flag killed in `on_cleanup`; task
//! completions check it before touching signals so a response that lands
//! after navigation is dropped.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde::de::DeserializeOwned;

use leptos_router::components::A;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::image_picker::{ImagePicker, ImageSlots};
use crate::components::search_bar::SearchBar;
use crate::components::status_line::StatusLine;
use crate::config::ApiConfig;
use crate::net::resource::{FormMode, ResourceSpec};
use crate::state::form::{FormDraft, FormState, FormStatus};
use crate::state::list::{ListItem, ListState, LoadStatus};
use crate::state::ui::{NoticeKind, UiState};
use crate::util::format::capitalize;
use crate::util::lifetime::Liveness;

// =============================================================================
// LIST
// =============================================================================

/// Handle to a resource list page's state and actions.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    spec: &'static ResourceSpec,
    query: StoredValue<Vec<(&'static str, String)>>,
    base: StoredValue<String>,
    liveness: StoredValue<Liveness>,
    ui: Option<RwSignal<UiState>>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

/// Create list state for `spec` and load it once on mount.
pub(crate) fn use_resource_list<T>(spec: &'static ResourceSpec, query: Vec<(&'static str, String)>) -> ListController<T>
where
    T: ListItem + DeserializeOwned + Send + Sync + 'static,
{
    let api = use_context::<ApiConfig>().unwrap_or_default();
    let liveness = Liveness::new();
    let cleanup_flag = liveness.clone();
    on_cleanup(move || cleanup_flag.kill());

    let controller = ListController {
        state: RwSignal::new(ListState::default()),
        spec,
        query: StoredValue::new(query),
        base: StoredValue::new(api.base_url),
        liveness: StoredValue::new(liveness),
        ui: use_context::<RwSignal<UiState>>(),
    };
    controller.reload();
    controller
}

impl<T> ListController<T>
where
    T: ListItem + DeserializeOwned + Send + Sync + 'static,
{
    /// Fetch the collection, superseding any load still in flight.
    pub fn reload(self) {
        let Some(ticket) = self.state.try_update(ListState::begin_load) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let spec = self.spec;
            let state = self.state;
            let base = self.base.get_value();
            let query = self.query.get_value();
            let alive = self.liveness.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_collection::<T>(&base, spec, &query).await;
                if !alive.is_alive() {
                    return;
                }
                if let Err(e) = &result {
                    leptos::logging::warn!("{} list load failed: {e}", spec.label);
                }
                state.update(|s| {
                    s.finish_load(ticket, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    }

    pub fn set_search(self, text: String) {
        self.state.update(|s| s.search = text);
    }

    pub fn request_delete(self, id: &str) {
        self.state.update(|s| s.request_delete(id));
    }

    pub fn cancel_delete(self) {
        self.state.update(ListState::cancel_delete);
    }

    /// Send the `DELETE` for the confirmed id and apply the outcome.
    pub fn confirm_delete(self) {
        let Some(id) = self.state.try_update(ListState::confirm_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let spec = self.spec;
            let state = self.state;
            let base = self.base.get_value();
            let alive = self.liveness.get_value();
            let ui = self.ui;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_record(&base, spec, &id).await;
                if !alive.is_alive() {
                    return;
                }
                match &result {
                    Ok(()) => {
                        if let Some(ui) = ui {
                            ui.update(|u| {
                                u.flash(NoticeKind::Success, format!("{} deleted", capitalize(spec.label)));
                            });
                        }
                    }
                    Err(e) => leptos::logging::warn!("{} delete failed: {e}", spec.label),
                }
                state.update(|s| s.finish_delete(&id, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }

    pub fn spec(self) -> &'static ResourceSpec {
        self.spec
    }
}

// =============================================================================
// FORM
// =============================================================================

/// Where an add/edit form gets its initial values.
pub(crate) enum FormSeed<E> {
    Blank,
    /// Edit the record with this id, fetched on mount.
    Fetch(String),
    /// Edit a record the page already holds.
    Existing(String, E),
}

/// Handle to a resource form's state, image slots, and submit action.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) struct FormController<D: Send + Sync + 'static> {
    pub state: RwSignal<FormState<D>>,
    pub images: ImageSlots,
    spec: &'static ResourceSpec,
    base: StoredValue<String>,
    liveness: StoredValue<Liveness>,
}

impl<D: Send + Sync + 'static> Clone for FormController<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormController<D> {}

/// Create form state for `spec`, seeded per `seed`.
pub(crate) fn use_resource_form<D>(spec: &'static ResourceSpec, seed: FormSeed<D::Entity>) -> FormController<D>
where
    D: FormDraft + Send + Sync + 'static,
    D::Entity: DeserializeOwned + Send + Sync + 'static,
{
    let api = use_context::<ApiConfig>().unwrap_or_default();
    let liveness = Liveness::new();
    let images = ImageSlots::new(spec.image_fields);

    let cleanup_flag = liveness.clone();
    on_cleanup(move || {
        cleanup_flag.kill();
        images.release();
    });

    let mode = match &seed {
        FormSeed::Blank => FormMode::Create,
        FormSeed::Fetch(id) | FormSeed::Existing(id, _) => FormMode::Edit(id.clone()),
    };
    let controller = FormController {
        state: RwSignal::new(FormState::new(mode)),
        images,
        spec,
        base: StoredValue::new(api.base_url),
        liveness: StoredValue::new(liveness),
    };

    match seed {
        FormSeed::Blank => {}
        FormSeed::Existing(_, entity) => {
            if let Some(existing) = controller.state.try_update(|s| s.seed(&entity)) {
                images.set_existing(existing);
            }
        }
        FormSeed::Fetch(id) => controller.load(id),
    }
    controller
}

impl<D> FormController<D>
where
    D: FormDraft + Send + Sync + 'static,
    D::Entity: DeserializeOwned + Send + Sync + 'static,
{
    fn load(self, id: String) {
        let Some(ticket) = self.state.try_update(FormState::begin_load) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let spec = self.spec;
            let state = self.state;
            let images = self.images;
            let base = self.base.get_value();
            let alive = self.liveness.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_record::<D::Entity>(&base, spec, &id).await;
                if !alive.is_alive() {
                    return;
                }
                if let Err(e) = &result {
                    leptos::logging::warn!("{} {id} load failed: {e}", spec.label);
                }
                if let Some(Some(existing)) = state.try_update(|s| s.finish_load(ticket, result)) {
                    images.set_existing(existing);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, id);
    }

    /// Edit the draft in place.
    pub fn edit(self, f: impl FnOnce(&mut D)) {
        self.state.update(|s| f(&mut s.draft));
    }

    /// Validate, build the multipart body, and send it.
    pub fn submit(self) {
        let snapshot = self.images.snapshot();
        let slots: Vec<_> = self.spec.image_fields.iter().copied().zip(snapshot.iter()).collect();
        if !self.state.try_update(|s| s.begin_submit(&slots)).unwrap_or(false) {
            return;
        }
        let (fields, mode) = self.state.with_untracked(|s| (s.draft.fields(), s.mode.clone()));
        let payload = crate::net::payload::build_payload(&fields, &slots, &mode);

        #[cfg(feature = "hydrate")]
        {
            let spec = self.spec;
            let state = self.state;
            let base = self.base.get_value();
            let alive = self.liveness.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_form(&base, spec, &mode, payload).await;
                if !alive.is_alive() {
                    return;
                }
                if let Err(e) = &result {
                    leptos::logging::warn!("{} save failed: {e}", spec.label);
                }
                state.update(|s| s.finish_submit(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, mode);
    }

    /// Clear the draft and new picks back to a blank create form.
    pub fn reset(self) {
        self.images.release();
        self.state.set(FormState::new(FormMode::Create));
    }

    pub fn spec(self) -> &'static ResourceSpec {
        self.spec
    }
}

/// Once the form reports `Saved`, flash a notice and return to the list.
pub(crate) fn return_to_list_when_saved<D>(form: FormController<D>)
where
    D: FormDraft + Send + Sync + 'static,
    D::Entity: DeserializeOwned + Send + Sync + 'static,
{
    let navigate = use_navigate();
    let ui = expect_context::<RwSignal<UiState>>();
    let spec = form.spec();
    Effect::new(move || {
        if form.state.with(|s| s.status == FormStatus::Saved) {
            ui.update(|u| {
                u.flash(NoticeKind::Success, format!("{} saved", capitalize(spec.label)));
            });
            navigate(spec.app_route, NavigateOptions::default());
        }
    });
}

// =============================================================================
// SHARED MARKUP
// =============================================================================

/// Page title, search box, optional add link, and load status.
#[component]
pub(crate) fn ListToolbar<T>(
    list: ListController<T>,
    title: &'static str,
    placeholder: &'static str,
    #[prop(optional)] add_label: Option<&'static str>,
) -> impl IntoView
where
    T: ListItem + DeserializeOwned + Send + Sync + 'static,
{
    let search = Signal::derive(move || list.state.with(|s| s.search.clone()));
    let status = Signal::derive(move || list.state.with(|s| s.status.clone()));
    let error = Signal::derive(move || list.state.with(|s| s.error.clone()));
    let no_matches = move || {
        list.state
            .with(|s| s.status == LoadStatus::Ready && !s.search.trim().is_empty() && s.filtered().is_empty())
    };

    view! {
        <header class="resource-page__header">
            <h1>{title}</h1>
            <SearchBar value=search on_input=Callback::new(move |text| list.set_search(text)) placeholder=placeholder />
            {add_label.map(|label| view! { <A href=list.spec().add_route() attr:class="btn btn--primary">{label}</A> })}
        </header>
        <StatusLine status=status error=error empty_text="Nothing here yet." />
        <Show when=no_matches>
            <p class="status-line status-line--empty">"No results match your search."</p>
        </Show>
    }
}

/// Delete confirmation for whichever row is pending.
#[component]
pub(crate) fn DeleteConfirm<T>(list: ListController<T>) -> impl IntoView
where
    T: ListItem + DeserializeOwned + Send + Sync + 'static,
{
    let label = list.spec().label;
    move || {
        list.state.with(|s| s.pending_delete.is_some()).then(|| {
            view! {
                <ConfirmDialog
                    title=format!("Delete {label}?")
                    message=format!("This {label} will be permanently removed.")
                    on_confirm=Callback::new(move |()| list.confirm_delete())
                    on_cancel=Callback::new(move |()| list.cancel_delete())
                />
            }
        })
    }
}

/// Image pickers for every slot of a form.
#[component]
pub(crate) fn FormImages<D>(form: FormController<D>) -> impl IntoView
where
    D: FormDraft + Send + Sync + 'static,
    D::Entity: DeserializeOwned + Send + Sync + 'static,
{
    form.spec()
        .image_fields
        .iter()
        .enumerate()
        .map(|(position, field)| view! { <ImagePicker slots=form.images position=position field=*field /> })
        .collect::<Vec<_>>()
}

/// Error line, load failure notice, and submit/cancel buttons of a form.
#[component]
pub(crate) fn FormActions<D>(
    form: FormController<D>,
    #[prop(optional_no_strip)] on_cancel: Option<Callback<()>>,
) -> impl IntoView
where
    D: FormDraft + Send + Sync + 'static,
    D::Entity: DeserializeOwned + Send + Sync + 'static,
{
    let error = move || form.state.with(|s| s.error.clone());
    let submitting = move || form.state.with(FormState::is_submitting);
    let submit_label = move || {
        form.state.with(|s| match (s.is_submitting(), s.mode.is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Save Changes",
            (false, false) => "Create",
        })
    };
    let back = form.spec().app_route;

    view! {
        {move || error().map(|message| view! { <p class="status-line status-line--error" role="alert">{message}</p> })}
        <div class="dialog__actions">
            {match on_cancel {
                Some(cancel) => {
                    view! {
                        <button type="button" class="btn" on:click=move |_| cancel.run(())>
                            "Cancel"
                        </button>
                    }
                        .into_any()
                }
                None => view! { <A href=back attr:class="btn">"Cancel"</A> }.into_any(),
            }}
            <button type="submit" class="btn btn--primary" disabled=submitting>
                {submit_label}
            </button>
        </div>
    }
}

/// Message shown instead of the form when an edit-mode load fails.
pub(crate) fn load_failure<D>(form: FormController<D>) -> Option<String>
where
    D: FormDraft + Send + Sync + 'static,
{
    form.state.with(|s| match &s.status {
        FormStatus::LoadFailed(e) => Some(format!("Could not load this {}: {e}", form.spec.label)),
        _ => None,
    })
}
