//! Client state models.
//!
//! DESIGN
//! ======
//! State types are plain data with transition methods. Pages wrap them in
//! `RwSignal`s and run the async calls; every rule about what a response
//! does to the screen lives here, where it can be unit tested.

pub mod banner;
pub mod drafts;
pub mod form;
pub mod images;
pub mod list;
pub mod ui;
