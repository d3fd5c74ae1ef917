//! Top navigation between admin sections.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;

const SECTIONS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/dashboard/homebanner", "Home Banner"),
    ("/hotel", "Hotels"),
    ("/cleaning", "Cleaning"),
    ("/cleaning/banner", "Cleaning Banner"),
    ("/providers", "Providers"),
    ("/inquiries", "Inquiries"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"Marketplace Admin"</span>
            <span class="nav-bar__divider" aria-hidden="true"></span>
            <nav class="nav-bar__links">
                {SECTIONS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href exact=true>{*label}</A> })
                    .collect::<Vec<_>>()}
            </nav>
            <span class="nav-bar__spacer"></span>
            <button class="btn nav-bar__theme" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
