//! Loading / empty / error line shown above list content.

use leptos::prelude::*;

use crate::state::list::LoadStatus;

/// Renders nothing once items are ready.
#[component]
pub fn StatusLine(
    #[prop(into)] status: Signal<LoadStatus>,
    #[prop(into)] error: Signal<Option<String>>,
    empty_text: &'static str,
) -> impl IntoView {
    view! {
        {move || match status.get() {
            LoadStatus::Idle | LoadStatus::Loading => {
                view! { <p class="status-line">"Loading..."</p> }.into_any()
            }
            LoadStatus::Empty | LoadStatus::Error(_) => {
                view! { <p class="status-line status-line--empty">{empty_text}</p> }.into_any()
            }
            LoadStatus::Ready => ().into_any(),
        }}
        <Show when=move || error.get().is_some()>
            <p class="status-line status-line--error" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
