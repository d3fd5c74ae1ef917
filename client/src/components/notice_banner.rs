//! Flash notice strip shown above page content.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

#[cfg(feature = "hydrate")]
const NOTICE_VISIBLE_MS: u64 = 4_000;

/// Shows `UiState::notice` and clears it after a few seconds.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(seq) = ui.with(|u| u.notice.as_ref().map(|n| n.seq)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_VISIBLE_MS)).await;
            let _ = ui.try_update(|u| u.dismiss(seq));
        });
    });

    move || {
        ui.get().notice.map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            let seq = notice.seq;
            view! {
                <div class=class role="status">
                    <span>{notice.message}</span>
                    <button class="notice__close" title="Dismiss" on:click=move |_| ui.update(|u| u.dismiss(seq))>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
