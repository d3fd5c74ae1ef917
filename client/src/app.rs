//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::notice_banner::NoticeBanner;
use crate::config::{API_BASE_META, ApiConfig};
use crate::pages::banner::{CleaningBannerPage, HomeBannerPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::hotel_form::HotelFormPage;
use crate::pages::hotels::HotelsPage;
use crate::pages::inquiries::InquiriesPage;
use crate::pages::provider_form::ProviderFormPage;
use crate::pages::provider_services::ProviderServicesPage;
use crate::pages::providers::ProvidersPage;
use crate::pages::service_form::ServiceFormPage;
use crate::pages::services::ServicesPage;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is the host's runtime backend URL; the hydrated client reads it
/// back from the `<meta>` tag.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API config and UI state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    provide_context(ApiConfig::detect());

    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/marketplace-admin.css"/>
        <Title text="Marketplace Admin"/>
        <Meta name="robots" content="noindex"/>

        <Router>
            <NavBar/>
            <NoticeBanner/>
            <main class="admin-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("homebanner")) view=HomeBannerPage/>
                    <Route path=StaticSegment("hotel") view=HotelsPage/>
                    <Route path=(StaticSegment("hotel"), StaticSegment("add")) view=HotelFormPage/>
                    <Route path=(StaticSegment("hotel"), ParamSegment("id"), StaticSegment("edit")) view=HotelFormPage/>
                    <Route path=StaticSegment("cleaning") view=ServicesPage/>
                    <Route path=(StaticSegment("cleaning"), StaticSegment("add")) view=ServiceFormPage/>
                    <Route path=(StaticSegment("cleaning"), StaticSegment("banner")) view=CleaningBannerPage/>
                    <Route path=(StaticSegment("cleaning"), ParamSegment("id"), StaticSegment("edit")) view=ServiceFormPage/>
                    <Route path=StaticSegment("providers") view=ProvidersPage/>
                    <Route path=(StaticSegment("providers"), StaticSegment("add")) view=ProviderFormPage/>
                    <Route path=(StaticSegment("providers"), ParamSegment("id"), StaticSegment("edit")) view=ProviderFormPage/>
                    <Route
                        path=(StaticSegment("providers"), ParamSegment("id"), StaticSegment("services"))
                        view=ProviderServicesPage
                    />
                    <Route path=StaticSegment("inquiries") view=InquiriesPage/>
                </Routes>
            </main>
        </Router>
    }
}
