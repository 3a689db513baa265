//! One-click reaction buttons.

use leptos::prelude::*;

use crate::components::panel_section::PanelSection;
use crate::state::composer::ComposerState;
use crate::state::panels::Panel;
use crate::util::palette::QUICK_REACTIONS;

#[component]
pub fn QuickReactions(draft: RwSignal<ComposerState>) -> impl IntoView {
    view! {
        <PanelSection draft panel=Panel::Reactions section_class="quick-react-section" title="⚡ Quick Reactions">
            <div class="quick-react-grid">
                {QUICK_REACTIONS
                    .iter()
                    .map(|reaction| {
                        view! {
                            <button
                                class="quick-react-btn"
                                style:background-color=reaction.color
                                on:click=move |_| draft.update(|d| d.select_reaction(reaction))
                            >
                                {reaction.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </PanelSection>
    }
}
