//! Local UI chrome state (theme and flash notices).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of resource state so a notice
//! raised on a form can survive the navigation back to its list.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tone of a flash notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
}

/// A short message shown at the top of the next page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Identifies this notice for delayed dismissal.
    pub seq: u64,
}

/// UI state shared through context as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl UiState {
    /// Replace the current notice. Returns its sequence number.
    pub fn flash(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { kind, message: message.into(), seq: self.notice_seq });
        self.notice_seq
    }

    /// Clear the notice if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}
