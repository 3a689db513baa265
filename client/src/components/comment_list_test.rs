use super::*;
use crate::state::comments::{DEFAULT_FONT, NewComment, Pattern};

const GIF: &str = "https://media.giphy.com/media/abc/giphy.gif";

fn record(text: &str, pattern: Pattern) -> CommentRecord {
    let mut list = CommentsState::default();
    list.add(NewComment {
        text: text.to_owned(),
        color: "#3498db".to_owned(),
        font: DEFAULT_FONT.to_owned(),
        pattern,
    })
    .clone()
}

#[test]
fn text_only_comment_has_plain_class_and_no_media() {
    let view = comment_view(&record("You're amazing!", Pattern::Solid));
    assert_eq!(view.class, "comment-item");
    assert_eq!(view.text.as_deref(), Some("You're amazing!"));
    assert_eq!(view.media, None);
    assert_eq!(view.style, "background-color: #3498db; font-family: Inter;");
}

#[test]
fn mixed_comment_renders_text_and_gif() {
    let view = comment_view(&record(&format!("Great job {GIF}"), Pattern::Solid));
    assert_eq!(view.class, "comment-item comment-gif comment-mixed");
    assert_eq!(view.text.as_deref(), Some("Great job"));
    assert_eq!(view.media.as_deref(), Some(GIF));
}

#[test]
fn gif_only_comment_has_no_text() {
    let view = comment_view(&record(GIF, Pattern::Solid));
    assert_eq!(view.class, "comment-item comment-gif");
    assert_eq!(view.text, None);
    assert_eq!(view.media.as_deref(), Some(GIF));
}

#[test]
fn pattern_background_flows_into_style() {
    let view = comment_view(&record("hi", Pattern::GradientRadial));
    assert!(view.style.starts_with("background: radial-gradient(circle, #3498db, "));
    assert!(view.style.ends_with("font-family: Inter;"));
}
