//! Profile card for the employee being celebrated.

use leptos::prelude::*;

use crate::state::profile::SpotlightProfile;

/// Photo with a placeholder fallback, followed by name and title.
#[component]
pub fn EmployeeCard(profile: SpotlightProfile) -> impl IntoView {
    let photo = RwSignal::new(profile.photo_url);
    let fallback = profile.fallback_photo_url;
    let alt = profile.name.clone();

    // Swap once; a failing placeholder must not loop.
    let on_error = move |_| {
        if photo.get_untracked() != fallback {
            photo.set(fallback.clone());
        }
    };

    view! {
        <div class="employee-card">
            <div class="employee-photo-container">
                <img class="employee-photo" src=move || photo.get() alt=alt on:error=on_error/>
            </div>
            <div class="employee-info">
                <h2 class="employee-name">{profile.name}</h2>
                <p class="employee-title">{profile.title}</p>
            </div>
        </div>
    }
}
