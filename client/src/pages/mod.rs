//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The generic list/form controllers live in `resource`.

pub mod banner;
pub mod dashboard;
pub mod hotel_form;
pub mod hotels;
pub mod inquiries;
pub mod provider_form;
pub mod provider_services;
pub mod providers;
pub(crate) mod resource;
pub mod service_form;
pub mod services;
