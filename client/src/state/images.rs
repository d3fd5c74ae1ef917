//! Image slot state: persisted URLs plus locally chosen files.
//!
//! DESIGN
//! ======
//! An image slot holds two kinds of images that must never be mixed before
//! submission: *existing* images already stored by the backend (plain URLs)
//! and *pending* images chosen in this session (a file handle paired with a
//! local preview URL). Each pending file and its preview live in one entry,
//! so removing by index can never desynchronize them.
//!
//! Preview URLs are browser resources. Every operation that drops a pending
//! entry hands its preview URL back to the caller for revocation.
//!
//! The file handle type is generic so this module stays testable off-browser.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

/// A locally selected file with its object-URL preview.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingImage<F> {
    pub file: F,
    pub preview_url: String,
}

/// Existing and pending images for one form input.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSet<F> {
    existing: Vec<String>,
    pending: Vec<PendingImage<F>>,
    single: bool,
}

impl<F> Default for ImageSet<F> {
    fn default() -> Self {
        Self { existing: Vec::new(), pending: Vec::new(), single: false }
    }
}

impl<F> ImageSet<F> {
    /// Multi-image slot.
    pub fn multi() -> Self {
        Self::default()
    }

    /// Slot holding at most one pending image.
    pub fn single() -> Self {
        Self { single: true, ..Self::default() }
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Replace the persisted URLs (edit-mode prefill).
    pub fn set_existing(&mut self, urls: Vec<String>) {
        self.existing = urls.into_iter().filter(|u| !u.trim().is_empty()).collect();
    }

    pub fn existing(&self) -> &[String] {
        &self.existing
    }

    pub fn pending(&self) -> &[PendingImage<F>] {
        &self.pending
    }

    /// Add a newly chosen file. Returns preview URLs that were evicted and
    /// must be revoked (single slots replace their previous pick).
    pub fn add_pending(&mut self, file: F, preview_url: String) -> Vec<String> {
        let evicted = if self.single { self.clear_pending() } else { Vec::new() };
        self.pending.push(PendingImage { file, preview_url });
        evicted
    }

    /// Remove the pending image at `index`, returning its preview URL.
    pub fn remove_pending(&mut self, index: usize) -> Option<String> {
        if index >= self.pending.len() {
            return None;
        }
        Some(self.pending.remove(index).preview_url)
    }

    /// Drop the persisted URL at `index` from the retained list. Other
    /// entries with the same URL are kept.
    pub fn remove_existing(&mut self, index: usize) -> Option<String> {
        if index >= self.existing.len() {
            return None;
        }
        Some(self.existing.remove(index))
    }

    /// Drop every pending image, returning their preview URLs.
    pub fn clear_pending(&mut self) -> Vec<String> {
        self.pending.drain(..).map(|p| p.preview_url).collect()
    }

    /// Preview URLs currently owned by this slot.
    pub fn preview_urls(&self) -> Vec<String> {
        self.pending.iter().map(|p| p.preview_url.clone()).collect()
    }

    /// Image to show for a single slot: the new pick wins over the stored one.
    pub fn primary_preview(&self) -> Option<&str> {
        self.pending
            .last()
            .map(|p| p.preview_url.as_str())
            .or_else(|| self.existing.first().map(String::as_str))
    }

    /// Total images that would exist after submission.
    pub fn len(&self) -> usize {
        if self.single {
            usize::from(!self.pending.is_empty() || !self.existing.is_empty())
        } else {
            self.existing.len() + self.pending.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: Clone> ImageSet<F> {
    /// Files to upload, in selection order.
    pub fn pending_files(&self) -> Vec<F> {
        self.pending.iter().map(|p| p.file.clone()).collect()
    }
}
