//! Image slot picker: stored images, new picks with previews, file input.
//!
//! DESIGN
//! ======
//! `ImageSlots` owns every `ImageSet` of one form in a local (non-`Send`)
//! signal, because pending entries hold DOM `File` handles. All mutations go
//! through it so preview object URLs are revoked whenever an entry is
//! dropped.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::net::resource::ImageField;
use crate::state::images::ImageSet;
use crate::util::files::{LocalFile, take_input_files};
use crate::util::object_url;

/// Image sets for every slot of one form, in slot order.
#[derive(Clone, Copy)]
pub struct ImageSlots {
    sets: RwSignal<Vec<ImageSet<LocalFile>>, LocalStorage>,
}

impl ImageSlots {
    pub fn new(fields: &[ImageField]) -> Self {
        let sets = fields
            .iter()
            .map(|f| if f.single { ImageSet::single() } else { ImageSet::multi() })
            .collect();
        Self { sets: RwSignal::new_local(sets) }
    }

    /// Replace stored URLs per slot (edit prefill).
    pub fn set_existing(self, per_slot: Vec<Vec<String>>) {
        self.sets.update(|sets| {
            for (set, urls) in sets.iter_mut().zip(per_slot) {
                set.set_existing(urls);
            }
        });
    }

    pub fn add_files(self, slot: usize, files: Vec<LocalFile>) {
        let mut evicted = Vec::new();
        self.sets.update(|sets| {
            let Some(set) = sets.get_mut(slot) else {
                return;
            };
            for file in files {
                let preview = object_url::create(&file).unwrap_or_default();
                evicted.extend(set.add_pending(file, preview));
            }
        });
        object_url::revoke_all(evicted);
    }

    pub fn remove_pending(self, slot: usize, index: usize) {
        let mut removed = None;
        self.sets.update(|sets| removed = sets.get_mut(slot).and_then(|s| s.remove_pending(index)));
        if let Some(url) = removed {
            object_url::revoke(&url);
        }
    }

    pub fn remove_existing(self, slot: usize, index: usize) {
        self.sets.update(|sets| {
            if let Some(set) = sets.get_mut(slot) {
                set.remove_existing(index);
            }
        });
    }

    /// Drop every pending pick and revoke its preview (reset and teardown).
    pub fn release(self) {
        let mut urls = Vec::new();
        let _ = self.sets.try_update(|sets| {
            for set in sets.iter_mut() {
                urls.extend(set.clear_pending());
            }
        });
        object_url::revoke_all(urls);
    }

    /// Snapshot of every slot for submission.
    pub fn snapshot(self) -> Vec<ImageSet<LocalFile>> {
        self.sets.get_untracked()
    }

    fn with_slot<R>(self, slot: usize, f: impl FnOnce(&ImageSet<LocalFile>) -> R) -> Option<R> {
        self.sets.with(|sets| sets.get(slot).map(f))
    }
}

/// Picker for the image slot at `position` of `slots`.
#[component]
pub fn ImagePicker(slots: ImageSlots, position: usize, field: ImageField) -> impl IntoView {
    let existing = move || {
        slots
            .with_slot(position, |set| {
                if set.is_single() && !set.pending().is_empty() {
                    Vec::new()
                } else {
                    set.existing().to_vec()
                }
            })
            .unwrap_or_default()
    };
    let previews = move || slots.with_slot(position, ImageSet::preview_urls).unwrap_or_default();
    let removable_existing = field.existing_field.is_some();

    view! {
        <fieldset class="image-picker">
            <legend>{field.label} {field.required_on_create.then_some(" *")}</legend>
            <div class="image-picker__grid">
                {move || {
                    existing()
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| {
                            view! {
                                <figure class="image-picker__thumb">
                                    <img src=url alt="" />
                                    {removable_existing
                                        .then(|| {
                                            view! {
                                                <button
                                                    type="button"
                                                    class="image-picker__remove"
                                                    title="Remove image"
                                                    on:click=move |_| slots.remove_existing(position, index)
                                                >
                                                    "×"
                                                </button>
                                            }
                                        })}
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    previews()
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| {
                            view! {
                                <figure class="image-picker__thumb image-picker__thumb--new">
                                    <img src=url alt="" />
                                    <button
                                        type="button"
                                        class="image-picker__remove"
                                        title="Remove image"
                                        on:click=move |_| slots.remove_pending(position, index)
                                    >
                                        "×"
                                    </button>
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <input
                class="image-picker__input"
                type="file"
                accept="image/*"
                multiple=!field.single
                on:change=move |ev| slots.add_files(position, take_input_files(&ev))
            />
        </fieldset>
    }
}
