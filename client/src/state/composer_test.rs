use super::*;
use crate::state::comments::CommentsState;
use crate::state::panels::PanelPhase;
use crate::util::palette::{PALETTE, QUICK_REACTIONS};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashSet;

const GIF: &str = "https://media.giphy.com/media/abc/giphy.gif";

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(1)
}

// =============================================================
// Submit: suppression
// =============================================================

#[test]
fn empty_or_whitespace_draft_is_suppressed() {
    for text in ["", " ", "\t\n  "] {
        let mut draft = ComposerState { text: text.to_owned(), ..ComposerState::default() };
        let mut list = CommentsState::default();
        match draft.submit(&mut rng()) {
            Ok(c) => {
                list.add(c);
            }
            Err(Suppressed) => {}
        }
        assert!(list.is_empty());
        assert_eq!(draft.text, text, "suppressed submit must not reset the draft");
    }
}

#[test]
fn suppressed_submit_keeps_selected_color() {
    let mut draft = ComposerState::default();
    draft.select_color("#3498db");
    assert_eq!(draft.submit(&mut rng()), Err(Suppressed));
    assert_eq!(draft.accent, AccentColor::Explicit("#3498db".to_owned()));
}

// =============================================================
// Submit: text composition
// =============================================================

#[test]
fn text_and_gif_are_joined_with_single_space() {
    let mut draft = ComposerState { text: "  Great job  ".to_owned(), ..ComposerState::default() };
    draft.select_media(GIF);
    let comment = draft.submit(&mut rng()).unwrap();
    assert_eq!(comment.text, format!("Great job {GIF}"));
}

#[test]
fn gif_only_draft_posts_the_url() {
    let mut draft = ComposerState { text: "   ".to_owned(), ..ComposerState::default() };
    draft.select_media(GIF);
    let comment = draft.submit(&mut rng()).unwrap();
    assert_eq!(comment.text, GIF);
}

#[test]
fn text_only_draft_posts_trimmed_text() {
    let mut draft = ComposerState { text: " hi ".to_owned(), ..ComposerState::default() };
    let comment = draft.submit(&mut rng()).unwrap();
    assert_eq!(comment.text, "hi");
    assert_eq!(comment.font, "Inter");
    assert_eq!(comment.pattern, Pattern::Solid);
}

#[test]
fn selecting_second_gif_replaces_first() {
    let mut draft = ComposerState::default();
    draft.select_media("https://media.giphy.com/media/one/giphy.gif");
    draft.select_media(GIF);
    assert_eq!(draft.media.as_deref(), Some(GIF));
    draft.remove_media();
    assert_eq!(draft.media, None);
    assert!(!draft.can_submit());
}

// =============================================================
// Submit: color resolution
// =============================================================

#[test]
fn explicit_color_is_used_verbatim() {
    let mut draft = ComposerState { text: "hi".to_owned(), ..ComposerState::default() };
    draft.select_color("#ffffff");
    let comment = draft.submit(&mut rng()).unwrap();
    assert_eq!(comment.color, "#ffffff");
}

#[test]
fn unset_color_is_drawn_from_palette_and_varies() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let mut draft = ComposerState { text: "hi".to_owned(), ..ComposerState::default() };
        let comment = draft.submit(&mut rng).unwrap();
        assert!(PALETTE.contains(&comment.color.as_str()));
        seen.insert(comment.color);
    }
    assert!(seen.len() > 1);
}

#[test]
fn quick_reaction_sets_text_preview_and_accent() {
    let mut draft = ComposerState::default();
    let reaction = &QUICK_REACTIONS[3];
    draft.select_reaction(reaction);
    assert_eq!(draft.text, reaction.label);
    assert_eq!(draft.preview_background(), reaction.color);
    assert_eq!(draft.accent, AccentColor::Explicit(reaction.color.to_owned()));

    let comment = draft.submit(&mut rng()).unwrap();
    assert_eq!(comment.text, reaction.label);
    assert_eq!(comment.color, reaction.color);
}

// =============================================================
// Reset
// =============================================================

#[test]
fn successful_submit_resets_the_draft() {
    let mut draft = ComposerState { text: "hi".to_owned(), ..ComposerState::default() };
    draft.select_color("#e74c3c");
    draft.select_media(GIF);
    draft.toggle_panel(Panel::Style);
    draft.submit(&mut rng()).unwrap();

    assert_eq!(draft.text, "");
    assert_eq!(draft.media, None);
    assert_eq!(draft.accent, AccentColor::Unset);
    assert_eq!(draft.preview_background(), NEUTRAL_PREVIEW_BACKGROUND);
    assert_eq!(draft.panels.active(), None);
}

// =============================================================
// Panels
// =============================================================

#[test]
fn opening_empty_gif_picker_requests_trending() {
    let mut draft = ComposerState::default();
    let toggle = draft.toggle_panel(Panel::Media);
    let ticket = toggle.load.expect("default load");
    assert_eq!(ticket.query, GifQuery::Trending);
    assert!(draft.gifs.loading);
}

#[test]
fn reopening_gif_picker_with_cached_results_skips_load() {
    let mut draft = ComposerState::default();
    let ticket = draft.toggle_panel(Panel::Media).load.unwrap();
    draft.gifs.apply(
        &ticket,
        Ok(vec![crate::net::types::GifItem {
            id: "a".to_owned(),
            title: String::new(),
            preview_url: "p.gif".to_owned(),
            full_url: "f.gif".to_owned(),
        }]),
    );
    draft.toggle_panel(Panel::Media);
    assert_eq!(draft.toggle_panel(Panel::Media).load, None);
}

#[test]
fn closing_gif_picker_never_loads() {
    let mut draft = ComposerState::default();
    draft.gifs.set_term(String::new());
    draft.toggle_panel(Panel::Media);
    let toggle = draft.toggle_panel(Panel::Media);
    assert!(toggle.closing.is_some());
    assert_eq!(toggle.load, None);
}

#[test]
fn switching_panels_reports_previous_for_animation() {
    let mut draft = ComposerState::default();
    draft.toggle_panel(Panel::Reactions);
    let toggle = draft.toggle_panel(Panel::Share);
    assert_eq!(toggle.closing.map(|t| t.panel), Some(Panel::Reactions));
    assert_eq!(draft.panels.phase(Panel::Reactions), PanelPhase::Closing);
    assert_eq!(draft.panels.phase(Panel::Share), PanelPhase::Open);
    assert_eq!(toggle.load, None);
}

#[test]
fn submit_keeps_ticket_sequences_increasing() {
    let mut draft = ComposerState { text: "hi".to_owned(), ..ComposerState::default() };
    let before = draft.toggle_panel(Panel::Media).load.unwrap();
    let style_close = {
        draft.toggle_panel(Panel::Style);
        draft.toggle_panel(Panel::Style).closing.unwrap()
    };
    draft.submit(&mut rng()).unwrap();

    let after = draft.toggle_panel(Panel::Media).load.unwrap();
    assert_ne!(before.seq, after.seq);
    assert!(!draft.gifs.apply(&before, Ok(Vec::new())));
    assert!(draft.gifs.loading, "stale response must not settle the new request");

    draft.toggle_panel(Panel::Style);
    let reopened_close = draft.toggle_panel(Panel::Style).closing.unwrap();
    assert_ne!(style_close, reopened_close);
}

#[test]
fn submit_invalidates_in_flight_search() {
    let mut draft = ComposerState { text: "hi".to_owned(), ..ComposerState::default() };
    let token = draft.gifs.set_term("cats".to_owned());
    let ticket = draft.gifs.debounce_elapsed(token).unwrap();
    draft.submit(&mut rng()).unwrap();

    assert_eq!(draft.gifs.debounce_elapsed(token), None);
    assert!(!draft.gifs.apply(&ticket, Ok(Vec::new())));
    assert_eq!(draft.gifs.term, "");
    assert!(!draft.gifs.loading);
}
