//! Collection state shared by every resource list page.
//!
//! DESIGN
//! ======
//! One `ListState<T>` drives hotels, services, providers, and inquiries. The
//! page controller owns the async calls; this type only records transitions,
//! which keeps every rule here testable without a browser.
//!
//! Loads are tagged with a generation ticket. A result whose ticket is older
//! than the latest `begin_load` is ignored, so a slow first response can
//! never overwrite a fresh reload.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::net::error::ApiError;
use crate::net::types::{Hotel, Inquiry, Provider, Service};

/// Lifecycle of a fetched collection or record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Empty,
    Error(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A record that can appear in a searchable list.
pub trait ListItem: Clone {
    /// Backend identifier.
    fn key(&self) -> &str;

    /// Fields consulted by the search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over `search_fields`.
    fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl ListItem for Service {
    fn key(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

impl ListItem for Hotel {
    fn key(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.location, &self.description]
    }
}

impl ListItem for Provider {
    fn key(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.city]
    }
}

impl ListItem for Inquiry {
    fn key(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.first_name, &self.last_name, &self.email, &self.message]
    }
}

/// Items, search text, and delete bookkeeping for one list page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub status: LoadStatus,
    pub search: String,
    /// Id awaiting confirmation in the delete dialog.
    pub pending_delete: Option<String>,
    /// Ids with a delete request in flight.
    pub processing: Vec<String>,
    /// Last non-fatal failure, shown inline.
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: LoadStatus::Idle,
            search: String::new(),
            pending_delete: None,
            processing: Vec::new(),
            error: None,
            generation: 0,
        }
    }
}

impl<T: ListItem> ListState<T> {
    /// Enter `Loading` and hand out the ticket the result must present.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        self.error = None;
        self.generation
    }

    /// Apply a load result. Returns `false` when the ticket is stale and the
    /// result was dropped.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if ticket != self.generation {
            return false;
        }
        match result {
            Ok(items) => {
                self.status = if items.is_empty() { LoadStatus::Empty } else { LoadStatus::Ready };
                self.items = items;
            }
            Err(e) => {
                self.items.clear();
                self.status = LoadStatus::Error(e.to_string());
                self.error = Some(format!("Could not load list: {e}"));
            }
        }
        true
    }

    /// Items matching the current search text, in server order.
    pub fn filtered(&self) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| item.matches(&self.search))
            .cloned()
            .collect()
    }

    pub fn is_processing(&self, id: &str) -> bool {
        self.processing.iter().any(|p| p == id)
    }

    /// Open the confirmation prompt for `id`. Ignored while that id is
    /// already being deleted.
    pub fn request_delete(&mut self, id: &str) {
        if self.is_processing(id) {
            return;
        }
        self.pending_delete = Some(id.to_owned());
    }

    /// Close the prompt without touching the list.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Accept the prompt. Returns the id to send a `DELETE` for, or `None`
    /// when nothing is pending or a request for that id is in flight.
    pub fn confirm_delete(&mut self) -> Option<String> {
        let id = self.pending_delete.take()?;
        if self.is_processing(&id) {
            return None;
        }
        self.error = None;
        self.processing.push(id.clone());
        Some(id)
    }

    /// Apply the outcome of a `DELETE`. Success removes exactly that row;
    /// failure keeps the list and records the message.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), ApiError>) {
        self.processing.retain(|p| p != id);
        match result {
            Ok(()) => {
                self.items.retain(|item| item.key() != id);
                if self.items.is_empty() && self.status == LoadStatus::Ready {
                    self.status = LoadStatus::Empty;
                }
            }
            Err(e) => self.error = Some(format!("Delete failed: {e}")),
        }
    }
}

