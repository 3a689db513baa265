//! Background color swatches.

use leptos::prelude::*;

use crate::components::panel_section::PanelSection;
use crate::state::composer::{AccentColor, ComposerState};
use crate::state::panels::Panel;
use crate::util::palette::PALETTE;

#[component]
pub fn StylePicker(draft: RwSignal<ComposerState>) -> impl IntoView {
    let is_selected = move |color: &str| draft.with(|d| matches!(&d.accent, AccentColor::Explicit(c) if c == color));

    view! {
        <PanelSection draft panel=Panel::Style section_class="style-picker-section" title="🎨 Choose a Style">
            <div class="style-options">
                <div class="color-grid">
                    {PALETTE
                        .iter()
                        .map(|&color| {
                            view! {
                                <div
                                    class="color-option"
                                    class:selected=move || is_selected(color)
                                    style:background-color=color
                                    title=color
                                    on:click=move |_| draft.update(|d| d.select_color(color))
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PanelSection>
    }
}
