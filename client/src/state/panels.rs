//! Composer side-panel visibility.
//!
//! DESIGN
//! ======
//! One `active` slot is the single source of truth for which panel is open,
//! so two panels can never both be marked open. Closing is applied to the
//! model immediately; the `closing` list only tells the view which panels are
//! still playing their outbound animation. Each close hands out a ticket and
//! the animation timer retires the panel only if its ticket is still current,
//! so a panel re-opened mid-animation is not torn down by the stale timer.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

/// The four optional composer sub-views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Reactions,
    Media,
    Style,
    Share,
}

/// What the view should show for a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Hidden,
    Open,
    /// Closed in the model, still animating out.
    Closing,
}

/// Handle for one outbound animation; pass back to [`PanelState::finish_close`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseTicket {
    pub panel: Panel,
    seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct PanelState {
    active: Option<Panel>,
    closing: Vec<CloseTicket>,
    next_seq: u64,
}

impl PanelState {
    pub fn active(&self) -> Option<Panel> {
        self.active
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.active == Some(panel)
    }

    pub fn phase(&self, panel: Panel) -> PanelPhase {
        if self.is_open(panel) {
            PanelPhase::Open
        } else if self.closing.iter().any(|t| t.panel == panel) {
            PanelPhase::Closing
        } else {
            PanelPhase::Hidden
        }
    }

    /// Open `panel`, or close it if it is already open.
    ///
    /// Returns the ticket for whichever panel started closing, if any. A
    /// panel that is mid-animation is treated as closed: toggling it opens it
    /// again and cancels its pending animation.
    pub fn toggle(&mut self, panel: Panel) -> Option<CloseTicket> {
        if self.is_open(panel) {
            self.active = None;
            return Some(self.begin_closing(panel));
        }
        let ticket = self.active.take().map(|previous| self.begin_closing(previous));
        self.closing.retain(|t| t.panel != panel);
        self.active = Some(panel);
        ticket
    }

    /// Close every panel without animation.
    pub fn reset(&mut self) {
        self.active = None;
        self.closing.clear();
    }

    /// Retire an outbound animation. Returns `false` for stale tickets.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        let before = self.closing.len();
        self.closing.retain(|t| *t != ticket);
        self.closing.len() != before
    }

    fn begin_closing(&mut self, panel: Panel) -> CloseTicket {
        self.next_seq += 1;
        let ticket = CloseTicket { panel, seq: self.next_seq };
        self.closing.retain(|t| t.panel != panel);
        self.closing.push(ticket);
        ticket
    }
}
