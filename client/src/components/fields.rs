//! Labelled form inputs bound to draft fields.

use leptos::prelude::*;

use crate::util::format::{coerce_number, format_number};

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                class="dialog__input"
                rows="4"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="dialog__input"
                type=input_type
                required=required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="dialog__label">
            {label}
            {required.then_some(" *")}
            {input}
        </label>
    }
}

/// Numeric input that reports `None` for empty or non-numeric text.
///
/// The typed text is kept locally so partial input like `1.` is not
/// reformatted mid-keystroke; it is resynced only when the bound value
/// changes from outside (edit-mode prefill).
#[component]
pub fn NumberField(
    label: &'static str,
    #[prop(into)] value: Signal<Option<f64>>,
    on_input: Callback<Option<f64>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    let raw = RwSignal::new(format_number(value.get_untracked()));
    Effect::new(move || {
        let current = value.get();
        if coerce_number(&raw.get_untracked()) != current {
            raw.set(format_number(current));
        }
    });

    view! {
        <label class="dialog__label">
            {label}
            {required.then_some(" *")}
            <input
                class="dialog__input"
                type="number"
                step=step.unwrap_or("any")
                required=required
                prop:value=move || raw.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    let parsed = coerce_number(&text);
                    raw.set(text);
                    on_input.run(parsed);
                }
            />
        </label>
    }
}

#[component]
pub fn CheckboxField(label: &'static str, #[prop(into)] checked: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <label class="dialog__label dialog__label--inline">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}
