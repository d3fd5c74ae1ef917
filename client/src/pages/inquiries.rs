//! Read-only contact inquiries.

use leptos::prelude::*;

use super::resource::{ListToolbar, use_resource_list};
use crate::net::resource::INQUIRIES;
use crate::net::types::Inquiry;
use crate::util::timestamp::{format_timestamp, local_offset_minutes};

#[component]
pub fn InquiriesPage() -> impl IntoView {
    let list = use_resource_list::<Inquiry>(&INQUIRIES, Vec::new());
    let offset = local_offset_minutes();

    let rows = move || {
        list.state
            .with(|s| s.filtered())
            .into_iter()
            .map(|inquiry| {
                let email = inquiry.email.clone();
                view! {
                    <tr>
                        <td>{inquiry.full_name()}</td>
                        <td>
                            <a href=format!("mailto:{email}")>{email.clone()}</a>
                        </td>
                        <td class="table__message">{inquiry.message.clone()}</td>
                        <td class="table__date">{format_timestamp(&inquiry.created_at, offset)}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="resource-page">
            <ListToolbar list=list title="Inquiries" placeholder="Search inquiries..." />
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Message"</th>
                        <th>"Received"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
