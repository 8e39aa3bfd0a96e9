//! Cards UI App
//!
//! Wires the filter form, the card list, and the summary readout together.

use leptos::prelude::*;

use crate::components::{CardList, FilterForm};
use crate::models::CardCounts;

#[component]
pub fn App() -> impl IntoView {
    let (filter, set_filter) = signal(String::new());
    let (counts, set_counts) = signal(CardCounts::default());
    let (loaded, set_loaded) = signal(false);

    let on_filter = Callback::new(move |next: String| set_filter.set(next));
    let on_loaded = Callback::new(move |_| set_loaded.set(true));

    view! {
        <main class="cards-app">
            <h1>"Cards"</h1>

            // The form stays disabled until the batch has arrived.
            <FilterForm disabled=Signal::derive(move || !loaded.get()) on_filter=on_filter />

            <CardList filter=filter on_loaded=on_loaded set_counts=set_counts />

            <p class="cards-summary">
                {move || {
                    let counts = counts.get();
                    format!("{} active of {} cards", counts.active, counts.cards)
                }}
            </p>
        </main>
    }
}
