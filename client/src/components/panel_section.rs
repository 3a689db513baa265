//! Collapsible section wrapper shared by the composer's side panels.

use leptos::prelude::*;

use crate::state::composer::ComposerState;
use crate::state::panels::{Panel, PanelPhase};

/// Renders `children` while `panel` is open or still animating out.
#[component]
pub fn PanelSection(
    draft: RwSignal<ComposerState>,
    panel: Panel,
    section_class: &'static str,
    title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let phase = move || draft.with(|d| d.panels.phase(panel));

    view! {
        <Show when=move || phase() != PanelPhase::Hidden>
            <div class=section_class class:animating-out=move || phase() == PanelPhase::Closing>
                <h3>{title}</h3>
                {children()}
            </div>
        </Show>
    }
}
