//! Composer draft: the not-yet-posted comment and its side panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! `CommentModal` keeps one `ComposerState` in a signal for its lifetime.
//! Everything here is synchronous; the component owns timers and requests
//! and feeds their results back in through `gifs` and `panels`.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use rand::Rng;

use crate::state::comments::{DEFAULT_FONT, NewComment, Pattern};
use crate::state::gif_search::{GifQuery, GifSearchState, SearchTicket};
use crate::state::panels::{CloseTicket, Panel, PanelState};
use crate::util::palette::{QuickReaction, random_palette_color};

/// Input wrapper background before any color is picked.
pub const NEUTRAL_PREVIEW_BACKGROUND: &str = "rgba(255, 255, 255, 0.05)";

/// Whether the user picked an accent color for this draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AccentColor {
    #[default]
    Unset,
    Explicit(String),
}

/// Submitting a draft with no text and no GIF.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suppressed;

/// Side effects the component must run after a panel toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelToggle {
    /// Panel whose outbound animation just started.
    pub closing: Option<CloseTicket>,
    /// Trending request to send for a freshly opened, empty GIF picker.
    pub load: Option<SearchTicket>,
}

#[derive(Clone, Debug, Default)]
pub struct ComposerState {
    pub text: String,
    /// Live preview color; `None` shows the neutral translucent fill.
    pub preview_background: Option<String>,
    pub accent: AccentColor,
    /// At most one selected GIF URL.
    pub media: Option<String>,
    pub panels: PanelState,
    pub gifs: GifSearchState,
}

impl ComposerState {
    pub fn preview_background(&self) -> &str {
        self.preview_background.as_deref().unwrap_or(NEUTRAL_PREVIEW_BACKGROUND)
    }

    /// Quick reaction: replaces the text and picks the reaction's color.
    pub fn select_reaction(&mut self, reaction: &QuickReaction) {
        self.text = reaction.label.to_owned();
        self.select_color(reaction.color);
    }

    /// Style swatch: sets both the preview and the posted color.
    pub fn select_color(&mut self, color: &str) {
        self.preview_background = Some(color.to_owned());
        self.accent = AccentColor::Explicit(color.to_owned());
    }

    pub fn select_media(&mut self, url: &str) {
        self.media = Some(url.to_owned());
    }

    pub fn remove_media(&mut self) {
        self.media = None;
    }

    pub fn toggle_panel(&mut self, panel: Panel) -> PanelToggle {
        let closing = self.panels.toggle(panel);
        let load = (panel == Panel::Media && self.panels.is_open(Panel::Media) && self.gifs.needs_default_load())
            .then(|| self.gifs.issue(GifQuery::Trending));
        PanelToggle { closing, load }
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() || self.media.is_some()
    }

    /// Finalize the draft.
    ///
    /// On success the draft is cleared and the comment returned; the caller
    /// then closes the dialog. An empty draft is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Suppressed`] when there is neither text nor a GIF.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<NewComment, Suppressed> {
        if !self.can_submit() {
            return Err(Suppressed);
        }
        let trimmed = self.text.trim();
        let text = match (trimmed.is_empty(), self.media.as_deref()) {
            (false, Some(url)) => format!("{trimmed} {url}"),
            (true, Some(url)) => url.to_owned(),
            (_, None) => trimmed.to_owned(),
        };
        let color = match &self.accent {
            AccentColor::Explicit(color) => color.clone(),
            AccentColor::Unset => random_palette_color(rng).to_owned(),
        };
        self.reset();
        Ok(NewComment { text, color, font: DEFAULT_FONT.to_owned(), pattern: Pattern::Solid })
    }

    /// Discard the draft, including panels and search results.
    ///
    /// Sequence counters keep counting so tickets issued before the reset
    /// stay stale.
    pub fn reset(&mut self) {
        self.text.clear();
        self.preview_background = None;
        self.accent = AccentColor::Unset;
        self.media = None;
        self.panels.reset();
        self.gifs.clear();
    }
}
