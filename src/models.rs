//! Frontend Models
//!
//! Data structures for remote posts and their display state.

use serde::Deserialize;

/// Post record as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// A post augmented with its UI-only active flag.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCard {
    pub post: Post,
    pub is_active: bool,
}

impl From<Post> for DisplayCard {
    fn from(post: Post) -> Self {
        Self {
            post,
            is_active: false,
        }
    }
}

/// Derived counts over the current filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardCounts {
    pub cards: usize,
    pub active: usize,
}

impl CardCounts {
    /// A negative count is a logic defect in the caller, not a recoverable
    /// condition, so it panics.
    pub fn new(cards: i64, active: i64) -> Self {
        assert!(cards >= 0, "incorrect cards count: {cards}");
        assert!(active >= 0, "incorrect active cards count: {active}");
        Self {
            cards: cards as usize,
            active: active as usize,
        }
    }

    /// Counts derived from a slice of display cards.
    pub fn of(cards: &[DisplayCard]) -> Self {
        Self::new(
            cards.len() as i64,
            cards.iter().filter(|c| c.is_active).count() as i64,
        )
    }
}

/// Load/display state of the card list.
#[derive(Debug, Clone, PartialEq)]
pub enum CardsState {
    Loading,
    Error(String),
    Loaded(Vec<DisplayCard>),
}
