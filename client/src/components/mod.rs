//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The spotlight page composes the display surface (`employee_card`,
//! `action_bar`, `comment_list`) and mounts `comment_modal` on demand. The
//! modal's panels share one `RwSignal<ComposerState>` passed down as a prop.

pub mod action_bar;
pub mod comment_list;
pub mod comment_modal;
pub mod employee_card;
pub mod gif_picker;
pub mod panel_section;
pub mod quick_reactions;
pub mod share_panel;
pub mod style_picker;
