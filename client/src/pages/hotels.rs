//! Hotel listings table.

use leptos::prelude::*;
use leptos_router::components::A;

use super::resource::{DeleteConfirm, ListToolbar, use_resource_list};
use crate::net::resource::HOTELS;
use crate::net::types::Hotel;
use crate::util::format::{format_number, format_price};

#[component]
pub fn HotelsPage() -> impl IntoView {
    let list = use_resource_list::<Hotel>(&HOTELS, Vec::new());

    let rows = move || {
        list.state
            .with(|s| s.filtered())
            .into_iter()
            .map(|hotel| {
                let id = hotel.id.clone();
                let busy_id = id.clone();
                let busy = move || list.state.with(|s| s.is_processing(&busy_id));
                view! {
                    <tr>
                        <td>
                            {hotel.images.first().cloned().map(|src| view! { <img class="table__thumb" src=src alt="" /> })}
                        </td>
                        <td>{hotel.name.clone()}</td>
                        <td>{hotel.location.clone()}</td>
                        <td>{format_price(hotel.price)}</td>
                        <td>{format_number(hotel.capacity)}</td>
                        <td>{hotel.amenities.join(", ")}</td>
                        <td>{if hotel.outside_food_allowed { "Yes" } else { "No" }}</td>
                        <td class="table__actions">
                            <A href=HOTELS.edit_route(&id) attr:class="btn">"Edit"</A>
                            <button class="btn btn--danger" disabled=busy on:click=move |_| list.request_delete(&id)>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="resource-page">
            <ListToolbar list=list title="Hotels" placeholder="Search hotels..." add_label="+ Add Hotel" />
            <table class="table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Name"</th>
                        <th>"Location"</th>
                        <th>"Price"</th>
                        <th>"Capacity"</th>
                        <th>"Amenities"</th>
                        <th>"Outside Food"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <DeleteConfirm list=list />
        </section>
    }
}
