//! Editable label/value rows for home banner metrics.

use leptos::prelude::*;

use crate::state::drafts::HomeBannerDraft;
use crate::state::form::FormState;

#[component]
pub fn MetricsEditor(form: RwSignal<FormState<HomeBannerDraft>>) -> impl IntoView {
    // Rows rebuild only when the row count changes, so typing keeps focus.
    let count = Memo::new(move |_| form.with(|f| f.draft.metrics.len()));

    view! {
        <fieldset class="metrics-editor">
            <legend>"Metrics"</legend>
            {move || {
                (0..count.get())
                    .map(|i| {
                        let label = move || form.with(|f| f.draft.metrics.get(i).map(|m| m.label.clone()).unwrap_or_default());
                        let value = move || form.with(|f| f.draft.metrics.get(i).map(|m| m.value.clone()).unwrap_or_default());
                        view! {
                            <div class="metrics-editor__row">
                                <input
                                    class="dialog__input"
                                    placeholder="Label"
                                    prop:value=label
                                    on:input=move |ev| form.update(|f| f.draft.set_metric_label(i, event_target_value(&ev)))
                                />
                                <input
                                    class="dialog__input"
                                    placeholder="Value"
                                    prop:value=value
                                    on:input=move |ev| form.update(|f| f.draft.set_metric_value(i, event_target_value(&ev)))
                                />
                                <button
                                    type="button"
                                    class="btn btn--danger"
                                    title="Remove metric"
                                    on:click=move |_| form.update(|f| f.draft.remove_metric(i))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button type="button" class="btn" on:click=move |_| form.update(|f| f.draft.add_metric())>
                "+ Add Metric"
            </button>
        </fieldset>
    }
}
