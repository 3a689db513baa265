//! GIF search panel: debounced search box and result grid.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are folded into the search state as an empty result set;
//! the grid then shows its "no GIFs" message instead of an error.

use leptos::prelude::*;

use crate::components::panel_section::PanelSection;
use crate::state::composer::ComposerState;
use crate::state::gif_search::{GridStatus, SearchTicket};
use crate::state::modal::ModalState;
use crate::state::panels::Panel;
use crate::util::timing::{SEARCH_DEBOUNCE, after};

/// Send the request for `ticket` and apply the response if still current.
pub(crate) fn run_gif_search(draft: RwSignal<ComposerState>, ticket: SearchTicket) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_gifs(&ticket.query).await;
            // Superseded tickets are dropped.
            let _ = draft.try_update(|d| d.gifs.apply(&ticket, outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (draft, ticket);
    }
}

#[component]
pub fn GifPicker(draft: RwSignal<ComposerState>, modal: RwSignal<ModalState>) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        if !modal.get_untracked().is_open() {
            return;
        }
        let Some(token) = draft.try_update(|d| d.gifs.set_term(event_target_value(&ev))) else {
            return;
        };
        after(SEARCH_DEBOUNCE, move || {
            if let Some(Some(ticket)) = draft.try_update(|d| d.gifs.debounce_elapsed(token)) {
                run_gif_search(draft, ticket);
            }
        });
    };

    let grid = move || match draft.with(|d| d.gifs.status()) {
        GridStatus::Loading => view! {
            <div class="gif-loading">
                <div class="loading-spinner"></div>
                <p>"Loading GIFs..."</p>
            </div>
        }
        .into_any(),
        GridStatus::Results => draft
            .with(|d| d.gifs.results.clone())
            .into_iter()
            .map(|gif| {
                let full_url = gif.full_url;
                view! {
                    <div class="gif-item" on:click=move |_| draft.update(|d| d.select_media(&full_url))>
                        <img src=gif.preview_url alt=gif.title loading="lazy"/>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
        GridStatus::NoMatches(term) => view! {
            <div class="no-gifs">
                <p>{format!("No GIFs found for \"{term}\"")}</p>
                <p>"Try a different search term"</p>
            </div>
        }
        .into_any(),
        GridStatus::Placeholder => view! {
            <div class="gif-placeholder-text">
                <p>"🔥 Loading trending GIFs..."</p>
                <p>"Or search for something specific above"</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <PanelSection draft panel=Panel::Media section_class="gif-picker-section" title="🖼 Choose a GIF">
            <div class="gif-search-container">
                <input
                    type="text"
                    class="gif-search-input"
                    placeholder="Search GIFs..."
                    prop:value=move || draft.with(|d| d.gifs.term.clone())
                    on:input=on_input
                />
            </div>
            <div class="gif-grid">{grid}</div>
        </PanelSection>
    }
}
