//! Reaction buttons under the spotlight description.

use leptos::prelude::*;

#[component]
pub fn ActionBar(on_comment: Callback<()>) -> impl IntoView {
    view! {
        <div class="action-bar">
            <button class="action-icon heart-btn" title="Love">
                "❤️"
            </button>
            <button class="action-icon comment-btn" title="Add a comment" on:click=move |_| on_comment.run(())>
                "💬"
            </button>
            <button class="action-icon medal-btn" title="Award">
                "🏅"
            </button>
        </div>
    }
}
