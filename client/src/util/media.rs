//! Media-reference detection inside comment text.
//!
//! Comments carry GIFs inline: the composer appends the GIF URL to the text.
//! The display surface splits those URLs back out so it can render an image
//! next to (or instead of) the remaining words.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Host fragment identifying the GIF provider.
const MEDIA_HOST: &str = "giphy.com";

/// True when a whitespace-delimited token looks like an animated-image URL.
pub fn is_media_reference(token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return false;
    }
    let lower = token.to_ascii_lowercase();
    if lower.contains(MEDIA_HOST) {
        return true;
    }
    let path = lower.split(['?', '#']).next().unwrap_or_default();
    path.ends_with(".gif")
}

/// Comment text split into display words and media URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentContent {
    /// Non-media words joined by single spaces.
    pub text: String,
    /// Media URLs in the order they appeared.
    pub media: Vec<String>,
}

impl CommentContent {
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }

    /// Only the first media reference is rendered.
    pub fn primary_media(&self) -> Option<&str> {
        self.media.first().map(String::as_str)
    }
}

/// Split comment text into display words and media URLs.
pub fn classify(text: &str) -> CommentContent {
    let (media, words): (Vec<&str>, Vec<&str>) = text.split_whitespace().partition(|t| is_media_reference(t));
    CommentContent {
        text: words.join(" "),
        media: media.into_iter().map(str::to_owned).collect(),
    }
}
