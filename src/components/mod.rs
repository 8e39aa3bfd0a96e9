//! UI Components
//!
//! Reusable Leptos components.

mod card;
mod card_list;
mod filter_form;

pub use card::Card;
pub use card_list::CardList;
pub use filter_form::FilterForm;
