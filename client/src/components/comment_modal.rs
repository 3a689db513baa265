//! Modal dialog for composing a spotlight comment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The spotlight page mounts this dialog while its "composer open" flag is
//! set and unmounts it after `on_close`. The draft lives only as long as the
//! dialog, so closing without posting discards it.
//!
//! While mounted the dialog holds a page scroll lock and a window Escape
//! listener. Both are released when the close animation ends and again from
//! `on_cleanup`, so unmounting mid-animation cannot leak either.

use leptos::prelude::*;

use crate::components::gif_picker::{GifPicker, run_gif_search};
use crate::components::quick_reactions::QuickReactions;
use crate::components::share_panel::SharePanel;
use crate::components::style_picker::StylePicker;
use crate::state::comments::NewComment;
use crate::state::composer::ComposerState;
use crate::state::modal::ModalState;
use crate::state::panels::Panel;
use crate::util::palette::session_rng;
use crate::util::scroll_lock::ModalScrollLock;
use crate::util::timing::{DIALOG_CLOSE, PANEL_CLOSE, after};

/// Comment composer with quick reactions, GIF search, color swatches, and a share code.
#[component]
pub fn CommentModal(on_add_comment: Callback<NewComment>, on_close: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(ComposerState::default());
    let modal = RwSignal::new(ModalState::default());
    modal.update(ModalState::open);

    let rng = StoredValue::new(session_rng());
    let scroll_lock = StoredValue::new(Some(ModalScrollLock::acquire()));
    let release_scroll_lock = move || {
        scroll_lock.try_update_value(|lock| {
            lock.take();
        });
    };

    let close = move || {
        if !modal.try_update(ModalState::begin_close).unwrap_or(false) {
            return;
        }
        after(DIALOG_CLOSE, move || {
            if modal.try_update(ModalState::finish_close).unwrap_or(false) {
                release_scroll_lock();
                on_close.run(());
            }
        });
    };

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                close();
            }
        });
        on_cleanup(move || handle.remove());
    }
    on_cleanup(release_scroll_lock);

    let submit = move || {
        if !modal.get_untracked().is_open() || !draft.with_untracked(ComposerState::can_submit) {
            return;
        }
        let mut local_rng = rng.get_value();
        let outcome = draft.try_update(|d| d.submit(&mut local_rng));
        rng.set_value(local_rng);
        if let Some(Ok(comment)) = outcome {
            on_add_comment.run(comment);
            close();
        }
    };

    let toggle_panel = move |panel: Panel| {
        if !modal.get_untracked().is_open() {
            return;
        }
        let Some(toggle) = draft.try_update(|d| d.toggle_panel(panel)) else {
            return;
        };
        if let Some(ticket) = toggle.closing {
            after(PANEL_CLOSE, move || {
                // Stale after a reopen.
                let _ = draft.try_update(|d| d.panels.finish_close(ticket));
            });
        }
        if let Some(ticket) = toggle.load {
            run_gif_search(draft, ticket);
        }
    };

    let media = move || draft.with(|d| d.media.clone());

    view! {
        <div class="modal-overlay" class:closing=move || modal.with(ModalState::is_closing) on:click=move |_| close()>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Add Your Comment"</h2>
                    <button class="close-btn" on:click=move |_| close() title="Close">
                        "✕"
                    </button>
                </div>

                <div class="modal-body">
                    <QuickReactions draft/>
                    <GifPicker draft modal/>
                    <StylePicker draft/>
                    <SharePanel draft/>

                    <div class="comment-action-buttons">
                        <button
                            class="toggle-reactions-btn"
                            class:active=move || draft.with(|d| d.panels.is_open(Panel::Reactions))
                            on:click=move |_| toggle_panel(Panel::Reactions)
                        >
                            "⚡ Quick Reactions"
                        </button>
                        <button
                            class="action-btn gif-btn"
                            class:active=move || draft.with(|d| d.panels.is_open(Panel::Media))
                            on:click=move |_| toggle_panel(Panel::Media)
                        >
                            "GIF"
                        </button>
                        <button
                            class="action-btn style-btn"
                            class:active=move || draft.with(|d| d.panels.is_open(Panel::Style))
                            on:click=move |_| toggle_panel(Panel::Style)
                        >
                            "Style"
                        </button>
                        <button
                            class="action-btn qr-btn"
                            class:active=move || draft.with(|d| d.panels.is_open(Panel::Share))
                            on:click=move |_| toggle_panel(Panel::Share)
                        >
                            "QR"
                        </button>
                    </div>

                    <div class="comment-input-container">
                        <div
                            class="comment-input-wrapper"
                            style:background-color=move || draft.with(|d| d.preview_background().to_owned())
                        >
                            <input
                                type="text"
                                class="comment-input"
                                placeholder="Type your comment here..."
                                prop:value=move || draft.with(|d| d.text.clone())
                                on:input=move |ev| draft.update(|d| d.text = event_target_value(&ev))
                            />
                            {move || {
                                media()
                                    .map(|url| {
                                        view! {
                                            <div class="gif-preview-inline">
                                                <button
                                                    class="gif-remove-btn"
                                                    on:click=move |_| draft.update(ComposerState::remove_media)
                                                    title="Remove GIF"
                                                >
                                                    "×"
                                                </button>
                                                <img src=url alt="Selected GIF" class="gif-preview-image-inline"/>
                                            </div>
                                        }
                                    })
                            }}
                        </div>
                        <button class="post-btn" on:click=move |_| submit()>
                            "Post"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
