//! GIF picker search state: debounce tokens, request sequencing, results.
//!
//! DESIGN
//! ======
//! Every keystroke bumps a debounce generation; the timer started for that
//! keystroke only fires a search if no later keystroke arrived. Every issued
//! request gets a sequence number and only the response to the latest one is
//! applied, so a slow earlier response can never overwrite newer results.
//!
//! ERROR HANDLING
//! ==============
//! A failed request is logged and shown as an empty grid; nothing propagates.

#[cfg(test)]
#[path = "gif_search_test.rs"]
mod gif_search_test;

use crate::net::types::GifItem;

/// What to ask the GIF proxy for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GifQuery {
    Trending,
    Search(String),
}

impl GifQuery {
    /// Blank terms fall back to trending.
    pub fn for_term(term: &str) -> Self {
        let trimmed = term.trim();
        if trimmed.is_empty() { Self::Trending } else { Self::Search(trimmed.to_owned()) }
    }
}

/// Identifies one keystroke's debounce timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Identifies one issued request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: GifQuery,
}

/// What the picker grid should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridStatus {
    Loading,
    Results,
    /// A keyword search came back empty.
    NoMatches(String),
    /// Nothing loaded yet and no term typed.
    Placeholder,
}

#[derive(Clone, Debug, Default)]
pub struct GifSearchState {
    pub term: String,
    pub results: Vec<GifItem>,
    pub loading: bool,
    debounce_gen: u64,
    latest_seq: u64,
}

impl GifSearchState {
    /// Record new input and return the token for its debounce timer.
    pub fn set_term(&mut self, term: String) -> DebounceToken {
        self.term = term;
        self.debounce_gen += 1;
        DebounceToken(self.debounce_gen)
    }

    /// Called when a debounce timer fires. Issues a search for the current
    /// term if no newer input superseded `token`.
    pub fn debounce_elapsed(&mut self, token: DebounceToken) -> Option<SearchTicket> {
        if token.0 != self.debounce_gen {
            return None;
        }
        Some(self.issue(GifQuery::for_term(&self.term)))
    }

    /// Drop the term and results and invalidate every outstanding debounce
    /// timer and request.
    pub fn clear(&mut self) {
        self.term.clear();
        self.results.clear();
        self.loading = false;
        self.debounce_gen += 1;
        self.latest_seq += 1;
    }

    /// True when opening the picker should load trending GIFs.
    pub fn needs_default_load(&self) -> bool {
        self.term.is_empty() && self.results.is_empty() && !self.loading
    }

    pub fn issue(&mut self, query: GifQuery) -> SearchTicket {
        self.latest_seq += 1;
        self.loading = true;
        SearchTicket { seq: self.latest_seq, query }
    }

    /// Apply a response. Returns `false` if the ticket was superseded.
    pub fn apply(&mut self, ticket: &SearchTicket, outcome: Result<Vec<GifItem>, String>) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }
        self.loading = false;
        self.results = match outcome {
            Ok(items) => items,
            Err(e) => {
                leptos::logging::warn!("gif search failed: query={:?} error={e}", ticket.query);
                Vec::new()
            }
        };
        true
    }

    pub fn status(&self) -> GridStatus {
        if self.loading {
            GridStatus::Loading
        } else if !self.results.is_empty() {
            GridStatus::Results
        } else if !self.term.is_empty() {
            GridStatus::NoMatches(self.term.clone())
        } else {
            GridStatus::Placeholder
        }
    }
}
