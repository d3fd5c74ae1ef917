//! Landing page linking to every admin section.

use leptos::prelude::*;
use leptos_router::components::A;

struct Section {
    href: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const SECTIONS: &[Section] = &[
    Section { href: "/hotel", title: "Hotels", blurb: "Listings, pricing, capacity, and photos." },
    Section { href: "/cleaning", title: "Cleaning Services", blurb: "Service catalogue and provider assignment." },
    Section { href: "/providers", title: "Providers", blurb: "Companies delivering cleaning services." },
    Section { href: "/dashboard/homebanner", title: "Home Banner", blurb: "Hero shown on the marketplace home page." },
    Section { href: "/cleaning/banner", title: "Cleaning Banner", blurb: "Hero shown on the cleaning page." },
    Section { href: "/inquiries", title: "Inquiries", blurb: "Messages sent through the contact form." },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <section class="dashboard-page">
            <h1>"Dashboard"</h1>
            <div class="dashboard-page__cards card-grid">
                {SECTIONS
                    .iter()
                    .map(|s| {
                        view! {
                            <A href=s.href attr:class="card dashboard-page__card">
                                <h3 class="card__title">{s.title}</h3>
                                <p class="card__text">{s.blurb}</p>
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
