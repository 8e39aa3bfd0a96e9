//! Filtering and Counting
//!
//! Pure helpers behind the card list render.

use std::collections::HashSet;

use thiserror::Error;

use crate::api::FetchError;
use crate::models::{CardCounts, CardsState, DisplayCard, Post};

/// Cards whose title contains `filter` as a case-sensitive substring.
/// An empty filter keeps everything.
pub fn filter_cards(cards: &[DisplayCard], filter: &str) -> Vec<DisplayCard> {
    if filter.is_empty() {
        cards.to_vec()
    } else {
        cards
            .iter()
            .filter(|c| c.post.title.contains(filter))
            .cloned()
            .collect()
    }
}

/// Set the active flag of the card with `id`. Unknown ids are ignored.
pub fn toggle_active(cards: &mut [DisplayCard], id: u32, active: bool) {
    if let Some(card) = cards.iter_mut().find(|c| c.post.id == id) {
        card.is_active = active;
    }
}

/// Map the settled fetch outcome onto the list state. Every loaded card
/// starts inactive.
pub fn settle(result: Result<Vec<Post>, FetchError>) -> CardsState {
    match result {
        Ok(posts) => CardsState::Loaded(posts.into_iter().map(DisplayCard::from).collect()),
        Err(err) => CardsState::Error(err.to_string()),
    }
}

/// The filtered view plus its derived counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub cards: Vec<DisplayCard>,
    pub counts: CardCounts,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewError {
    #[error("duplicate card id {0}")]
    DuplicateId(u32),
}

/// Build the view for the loaded state. Checkbox toggles are wired by id,
/// so a duplicate id aborts the render instead of producing an ambiguous
/// list.
pub fn build_view(cards: &[DisplayCard], filter: &str) -> Result<FilteredView, ViewError> {
    let cards = filter_cards(cards, filter);

    let mut seen = HashSet::new();
    for card in &cards {
        if !seen.insert(card.post.id) {
            return Err(ViewError::DuplicateId(card.post.id));
        }
    }

    let counts = CardCounts::of(&cards);
    Ok(FilteredView { cards, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, title: &str) -> DisplayCard {
        DisplayCard::from(Post {
            id,
            title: title.to_string(),
            body: format!("body {id}"),
        })
    }

    #[test]
    fn empty_filter_keeps_all_cards() {
        let cards = vec![card(1, "Alpha"), card(2, "Beta")];
        assert_eq!(filter_cards(&cards, ""), cards);
    }

    #[test]
    fn filter_keeps_exactly_matching_titles() {
        let cards = vec![card(1, "Alpha"), card(2, "Beta"), card(3, "Alphabet")];
        let filtered = filter_cards(&cards, "Alpha");
        let titles: Vec<&str> = filtered.iter().map(|c| c.post.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Alphabet"]);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let cards = vec![card(1, "Alpha")];
        assert!(filter_cards(&cards, "alpha").is_empty());
    }

    #[test]
    fn no_match_yields_empty_view() {
        let cards = vec![card(1, "Alpha"), card(2, "Beta")];
        let view = build_view(&cards, "zzz").unwrap();
        assert!(view.cards.is_empty());
        assert_eq!(view.counts, CardCounts::default());
    }

    #[test]
    fn counts_follow_loaded_batch() {
        let cards = vec![card(1, "Alpha"), card(2, "Beta")];
        let view = build_view(&cards, "").unwrap();
        assert_eq!(view.counts, CardCounts { cards: 2, active: 0 });
    }

    #[test]
    fn toggle_changes_active_count_by_one() {
        let mut cards = vec![card(1, "Alpha"), card(2, "Beta"), card(3, "Alphabet")];

        toggle_active(&mut cards, 3, true);
        let view = build_view(&cards, "Alpha").unwrap();
        assert_eq!(view.counts, CardCounts { cards: 2, active: 1 });

        toggle_active(&mut cards, 3, false);
        let view = build_view(&cards, "Alpha").unwrap();
        assert_eq!(view.counts, CardCounts { cards: 2, active: 0 });
    }

    #[test]
    fn toggle_never_touches_cards_outside_the_filter() {
        let mut cards = vec![card(1, "Alpha"), card(2, "Beta")];
        toggle_active(&mut cards, 1, true);

        let outside = filter_cards(&cards, "Beta");
        assert_eq!(outside.len(), 1);
        assert!(!outside[0].is_active);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut cards = vec![card(1, "Alpha")];
        toggle_active(&mut cards, 42, true);
        assert!(!cards[0].is_active);
    }

    #[test]
    fn settle_success_loads_inactive_cards() {
        let posts = vec![
            Post {
                id: 1,
                title: "Alpha".into(),
                body: "first".into(),
            },
            Post {
                id: 2,
                title: "Beta".into(),
                body: "second".into(),
            },
        ];

        match settle(Ok(posts)) {
            CardsState::Loaded(cards) => {
                assert_eq!(cards.len(), 2);
                assert!(cards.iter().all(|c| !c.is_active));
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn settle_failure_carries_the_error_text() {
        let err = FetchError::Http("connection refused".into());
        let expected = err.to_string();
        assert_eq!(settle(Err(err)), CardsState::Error(expected));
    }

    #[test]
    fn duplicate_ids_abort_the_view() {
        let cards = vec![card(7, "Alpha"), card(7, "Beta")];
        assert_eq!(build_view(&cards, ""), Err(ViewError::DuplicateId(7)));
    }
}
