//! Search input for list pages.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <input
            class="search-bar"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
