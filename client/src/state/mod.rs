//! Client state modules for the spotlight widget.
//!
//! DESIGN
//! ======
//! Plain data types with synchronous transitions. Components wrap them in
//! `RwSignal`s and own every timer and request, so all behavior here is
//! unit-testable without a browser.

pub mod comments;
pub mod composer;
pub mod gif_search;
pub mod modal;
pub mod panels;
pub mod profile;
