//! Static QR code for sharing.
//!
//! The code always points at the same placeholder page; it does not encode
//! the draft.

use leptos::prelude::*;

use crate::components::panel_section::PanelSection;
use crate::state::composer::ComposerState;
use crate::state::panels::Panel;

#[cfg(test)]
#[path = "share_panel_test.rs"]
mod share_panel_test;

const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";
const SHARE_TARGET: &str = "https://example.com/comment";
const QR_SIZE_PX: u32 = 100;

/// Image URL for a square QR code of `target`.
fn qr_image_url(target: &str, size_px: u32) -> String {
    format!("{QR_SERVICE_URL}?size={size_px}x{size_px}&data={target}")
}

#[component]
pub fn SharePanel(draft: RwSignal<ComposerState>) -> impl IntoView {
    let src = qr_image_url(SHARE_TARGET, QR_SIZE_PX);

    view! {
        <PanelSection draft panel=Panel::Share section_class="qr-section" title="Scan QR Code to share comment">
            <div class="qr-container">
                <div class="qr-code-wrapper">
                    <img src=src.clone() alt="QR Code" class="qr-code-image"/>
                </div>
            </div>
        </PanelSection>
    }
}
