//! Page scroll lock held while a modal is open.
//!
//! TRADE-OFFS
//! ==========
//! The guard holds no DOM handle so it stays `Send + Sync` and can live in a
//! `StoredValue` released from `on_cleanup`. Locks are counted, so stacked
//! dialogs only restore scrolling when the last one goes away.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use std::sync::atomic::{AtomicUsize, Ordering};

static ACTIVE_LOCKS: AtomicUsize = AtomicUsize::new(0);

/// Disables body scrolling until dropped.
#[derive(Debug)]
pub struct ModalScrollLock {
    _private: (),
}

impl ModalScrollLock {
    pub fn acquire() -> Self {
        if ACTIVE_LOCKS.fetch_add(1, Ordering::SeqCst) == 0 {
            set_body_overflow(Some("hidden"));
        }
        Self { _private: () }
    }

    /// Number of live locks.
    pub fn active_count() -> usize {
        ACTIVE_LOCKS.load(Ordering::SeqCst)
    }
}

impl Drop for ModalScrollLock {
    fn drop(&mut self) {
        if ACTIVE_LOCKS.fetch_sub(1, Ordering::SeqCst) == 1 {
            set_body_overflow(None);
        }
    }
}

fn set_body_overflow(value: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let _ = match value {
            Some(v) => style.set_property("overflow", v),
            None => style.remove_property("overflow").map(|_| ()),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
