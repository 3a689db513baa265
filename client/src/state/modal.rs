//! Composer dialog lifecycle.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    Open,
    /// Closed for input, still playing the outbound animation.
    Closing,
}

/// Open/close state for one dialog instance.
///
/// `begin_close` flips the dialog out of `Open` at once; the host is only
/// told the dialog closed when the animation timer calls `finish_close`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModalState {
    phase: ModalPhase,
}

impl ModalState {
    /// Accepting input.
    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn is_closing(&self) -> bool {
        self.phase == ModalPhase::Closing
    }

    pub fn open(&mut self) {
        self.phase = ModalPhase::Open;
    }

    /// Start the close animation. Returns `false` if the dialog was not open,
    /// so repeated Escape presses or backdrop clicks schedule one timer only.
    pub fn begin_close(&mut self) -> bool {
        if self.phase != ModalPhase::Open {
            return false;
        }
        self.phase = ModalPhase::Closing;
        true
    }

    /// End the close animation. Returns `true` when the host should be
    /// notified.
    pub fn finish_close(&mut self) -> bool {
        if self.phase != ModalPhase::Closing {
            return false;
        }
        self.phase = ModalPhase::Hidden;
        true
    }
}
