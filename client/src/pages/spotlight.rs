//! Employee spotlight page: profile card, comment list, and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns nothing durable. The comment list comes from the
//! `RwSignal<CommentsState>` context provided by `App`; the composer is
//! mounted only while `composer_open` is set and hands finished comments
//! back through `on_add_comment`.

use leptos::prelude::*;

use crate::components::action_bar::ActionBar;
use crate::components::comment_list::CommentList;
use crate::components::comment_modal::CommentModal;
use crate::components::employee_card::EmployeeCard;
use crate::state::comments::{CommentsState, NewComment};
use crate::state::profile::SpotlightProfile;

#[component]
pub fn SpotlightPage() -> impl IntoView {
    let comments = expect_context::<RwSignal<CommentsState>>();
    let profile = SpotlightProfile::default();
    let composer_open = RwSignal::new(false);

    let on_add_comment = Callback::new(move |comment: NewComment| {
        comments.update(|list| {
            let record = list.add(comment);
            leptos::logging::log!("comment {} added ({})", record.id, record.pattern.as_str());
        });
    });
    let on_close = Callback::new(move |()| composer_open.set(false));
    let on_comment = Callback::new(move |()| composer_open.set(true));

    let celebration_images = profile.celebration_images.clone();
    let headline = profile.headline.clone();
    let description = profile.description.clone();

    view! {
        <div class="spotlight-container">
            <div class="spotlight-main">
                <EmployeeCard profile/>
                <div class="spotlight-content">
                    <h1 class="spotlight-headline">{headline}</h1>
                    <p class="spotlight-description">{description}</p>
                    <ActionBar on_comment/>
                </div>
            </div>
            <aside class="spotlight-sidebar">
                <CommentList comments celebration_images/>
            </aside>
            <Show when=move || composer_open.get()>
                <CommentModal on_add_comment on_close/>
            </Show>
        </div>
    }
}
