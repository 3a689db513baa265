//! Comment records and the append-only display list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The spotlight page owns one `CommentsState` behind a signal. The composer
//! never touches it directly; it produces a `NewComment` that the page hands
//! to [`CommentsState::add`], which assigns the id and freezes the record.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;


use crate::util::color::normalize_hex_color;

/// Font applied to every comment.
pub const DEFAULT_FONT: &str = "Inter";

/// Background paint style applied behind a rendered comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pattern {
    #[default]
    Solid,
    GradientDiagonal,
    GradientRadial,
    GradientVertical,
    Dots,
    Stripes,
    Waves,
    Geometric,
    Marble,
    Noise,
}

impl Pattern {
    #[cfg(test)]
    pub const ALL: [Self; 10] = [
        Self::Solid,
        Self::GradientDiagonal,
        Self::GradientRadial,
        Self::GradientVertical,
        Self::Dots,
        Self::Stripes,
        Self::Waves,
        Self::Geometric,
        Self::Marble,
        Self::Noise,
    ];

    /// Stable kebab-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::GradientDiagonal => "gradient-diagonal",
            Self::GradientRadial => "gradient-radial",
            Self::GradientVertical => "gradient-vertical",
            Self::Dots => "dots",
            Self::Stripes => "stripes",
            Self::Waves => "waves",
            Self::Geometric => "geometric",
            Self::Marble => "marble",
            Self::Noise => "noise",
        }
    }
}

/// A finalized comment as produced by the composer, before it has an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub color: String,
    pub font: String,
    pub pattern: Pattern,
}

/// An immutable comment in the display list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentRecord {
    /// Session-unique, strictly increasing identifier.
    pub id: u64,
    pub text: String,
    /// Canonical lowercase `#rrggbb`.
    pub color: String,
    pub font: String,
    pub pattern: Pattern,
}

/// Ordered list of comments shown on the display surface.
#[derive(Clone, Debug, Default)]
pub struct CommentsState {
    records: Vec<CommentRecord>,
    last_id: u64,
}

impl CommentsState {
    /// List pre-populated with the welcome comments.
    pub fn seeded() -> Self {
        let mut state = Self::default();
        for (text, color) in [
            ("We're so proud of you!", "#A855F7"),
            ("You're amazing!", "#EA580C"),
            ("Awesome job!", "#059669"),
        ] {
            state.add(NewComment {
                text: text.to_owned(),
                color: color.to_owned(),
                font: DEFAULT_FONT.to_owned(),
                pattern: Pattern::Solid,
            });
        }
        state
    }

    /// Append a comment and return the stored record.
    ///
    /// Ids are assigned from a per-list counter so two comments created in
    /// the same millisecond still get distinct ids.
    pub fn add(&mut self, comment: NewComment) -> &CommentRecord {
        self.last_id += 1;
        let fallback = crate::util::palette::PALETTE[0];
        self.records.push(CommentRecord {
            id: self.last_id,
            text: comment.text,
            color: normalize_hex_color(&comment.color, fallback),
            font: comment.font,
            pattern: comment.pattern,
        });
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[CommentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
