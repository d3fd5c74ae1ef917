//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render admin chrome and form widgets while pages own the
//! resource state they read and write.

pub mod confirm_dialog;
pub mod fields;
pub mod image_picker;
pub mod metrics_editor;
pub mod nav_bar;
pub mod notice_banner;
pub mod search_bar;
pub mod status_line;
