//! Fixed UI delays and a deferred-callback helper.
//!
//! In the browser callbacks run on the event loop after the delay. Outside
//! the browser there is no user interaction to animate, so they run at once.

use std::time::Duration;

/// Dialog fade-out before the host is told it closed.
pub const DIALOG_CLOSE: Duration = Duration::from_millis(300);
/// Side-panel slide-out.
pub const PANEL_CLOSE: Duration = Duration::from_millis(500);
/// Quiet period after the last keystroke before searching.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);
/// Layout settle time before scrolling to a new comment.
pub const AUTOSCROLL_DELAY: Duration = Duration::from_millis(100);

/// Run `f` after `delay`.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
        f();
    }
}
