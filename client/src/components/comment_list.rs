//! Scrolling comment list on the spotlight sidebar.
//!
//! Each record is classified into text and GIF parts and painted with its
//! pattern background. The list scrolls itself to the newest comment shortly
//! after every append, once layout has settled.

use leptos::prelude::*;

use crate::state::comments::{CommentRecord, CommentsState};
use crate::state::profile::CelebrationImage;
use crate::util::background::background_for;
use crate::util::media::classify;
use crate::util::timing::{AUTOSCROLL_DELAY, after};

#[cfg(test)]
#[path = "comment_list_test.rs"]
mod comment_list_test;

/// Everything needed to render one comment bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentView {
    pub class: String,
    pub style: String,
    pub text: Option<String>,
    /// First media reference only.
    pub media: Option<String>,
}

pub fn comment_view(record: &CommentRecord) -> CommentView {
    let content = classify(&record.text);
    let mut class = "comment-item".to_owned();
    if content.has_media() {
        class.push_str(" comment-gif");
    }
    if content.has_media() && content.has_text() {
        class.push_str(" comment-mixed");
    }
    let style = format!(
        "{} font-family: {};",
        background_for(&record.color, record.pattern).to_css(),
        record.font
    );
    CommentView {
        class,
        style,
        media: content.primary_media().map(str::to_owned),
        text: content.has_text().then_some(content.text),
    }
}

fn scroll_to_bottom(list_ref: NodeRef<leptos::html::Div>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = list_ref.get_untracked() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(f64::from(el.scroll_height()));
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = list_ref;
    }
}

#[component]
pub fn CommentBubble(record: CommentRecord) -> impl IntoView {
    let CommentView { class, style, text, media } = comment_view(&record);

    view! {
        <div class=class style=style>
            {text.map(|text| view! { <span class="comment-text">{text}</span> })}
            {media.map(|url| view! { <img src=url alt="Celebration GIF" class="comment-gif-image"/> })}
        </div>
    }
}

#[component]
pub fn CommentList(comments: RwSignal<CommentsState>, celebration_images: Vec<CelebrationImage>) -> impl IntoView {
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = comments.with(CommentsState::len);
        after(AUTOSCROLL_DELAY, move || scroll_to_bottom(list_ref));
    });

    view! {
        <div class="comment-list" node_ref=list_ref>
            <div class="comment-images">
                {celebration_images
                    .into_iter()
                    .map(|image| view! { <img src=image.url alt=image.alt class="comment-image"/> })
                    .collect_view()}
            </div>
            <For
                each=move || comments.with(|c| c.records().to_vec())
                key=|record| record.id
                children=move |record| view! { <CommentBubble record/> }
            />
        </div>
    }
}
