//! Singleton banner state (home page and cleaning page heroes).
//!
//! DESIGN
//! ======
//! The backend keeps at most one banner per kind but still answers with a
//! list. The first record wins; extras are counted so the page can log them.
//! Create is only offered while no banner is loaded, which keeps this client
//! from racing itself into a second record.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::net::error::ApiError;
use crate::net::resource::{CLEANING_BANNERS, HOME_BANNERS, ResourceSpec};
use crate::net::types::Banner;
use crate::state::list::LoadStatus;

/// Which hero banner a page manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Home,
    Cleaning,
}

impl BannerKind {
    pub fn spec(self) -> &'static ResourceSpec {
        match self {
            Self::Home => &HOME_BANNERS,
            Self::Cleaning => &CLEANING_BANNERS,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home Banner",
            Self::Cleaning => "Cleaning Banner",
        }
    }
}

/// What the banner page should render.
#[derive(Clone, Debug, PartialEq)]
pub enum BannerView {
    Loading,
    /// No banner exists: show the create form.
    Create,
    /// Read-only preview with Edit and Delete.
    Preview(Banner),
    /// Edit form seeded from this banner.
    Edit(Banner),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerState {
    pub status: LoadStatus,
    pub banner: Option<Banner>,
    pub editing: bool,
    pub deleting: bool,
    /// Records beyond the first in the last load.
    pub duplicates: usize,
    pub error: Option<String>,
    generation: u64,
}

impl BannerState {
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        self.error = None;
        self.generation
    }

    /// Keep the first banner of the response. Returns `false` for stale tickets.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<Banner>, ApiError>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.editing = false;
        match result {
            Ok(banners) => {
                self.duplicates = banners.len().saturating_sub(1);
                self.banner = banners.into_iter().next();
                self.status = if self.banner.is_some() { LoadStatus::Ready } else { LoadStatus::Empty };
            }
            Err(e) => {
                self.duplicates = 0;
                self.banner = None;
                self.status = LoadStatus::Error(e.to_string());
                self.error = Some(format!("Could not load banner: {e}"));
            }
        }
        true
    }

    pub fn view(&self) -> BannerView {
        match (&self.banner, self.editing) {
            (None, _) if self.status.is_loading() => BannerView::Loading,
            (None, _) => BannerView::Create,
            (Some(banner), true) => BannerView::Edit(banner.clone()),
            (Some(banner), false) => BannerView::Preview(banner.clone()),
        }
    }

    /// Switch the preview into the edit form.
    pub fn start_edit(&mut self) {
        if self.banner.is_some() {
            self.editing = true;
            self.error = None;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
    }

    /// Claim the delete slot. Returns the id to delete, or `None` when there
    /// is no banner or a delete is already running.
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.deleting {
            return None;
        }
        let id = self.banner.as_ref()?.id.clone();
        self.deleting = true;
        self.error = None;
        Some(id)
    }

    /// A successful delete reverts the page to the create form.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) {
        self.deleting = false;
        match result {
            Ok(()) => {
                self.banner = None;
                self.editing = false;
                self.status = LoadStatus::Empty;
            }
            Err(e) => self.error = Some(format!("Delete failed: {e}")),
        }
    }

    /// Leave edit mode after a save; the page refetches next.
    pub fn finish_save(&mut self) {
        self.editing = false;
        self.error = None;
    }
}
