//! Card Component
//!
//! A single title/content list entry. Purely presentational.

use leptos::prelude::*;

const DEFAULT_TITLE: &str = "Not set title";
const DEFAULT_CONTENT: &str = "Not set content";

/// Renders a list entry with a heading and a paragraph. Empty values fall
/// back to placeholder text. Extra children (the card list's checkbox) are
/// rendered after the content.
#[component]
pub fn Card(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] content: Signal<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let title_text = move || {
        let title = title.get();
        if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        }
    };
    let content_text = move || {
        let content = content.get();
        if content.is_empty() {
            DEFAULT_CONTENT.to_string()
        } else {
            content
        }
    };

    view! {
        <li class="card">
            <h2>{title_text}</h2>
            <p>{content_text}</p>
            {children.map(|children| children())}
        </li>
    }
}
