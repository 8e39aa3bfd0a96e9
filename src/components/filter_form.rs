//! Filter Form Component
//!
//! A single text input committing a filter substring on submit. The
//! committed value is mirrored into the `filter` URL query parameter.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::query;

#[component]
pub fn FilterForm(
    /// Disables the input and the submit button.
    #[prop(into)] disabled: Signal<bool>,
    /// Receives the committed (trimmed) filter: once on mount with the value
    /// taken from the URL, then on every submit.
    on_filter: Callback<String>,
) -> impl IntoView {
    let initial = query::initial_filter();
    let (value, set_value) = signal(initial.clone());

    // Announce the URL-carried filter right away so the list starts out
    // filtered; this fires whether or not the form is disabled.
    on_filter.run(initial);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let committed = value.get().trim().to_string();
        query::sync_filter(&committed);
        set_value.set(committed.clone());
        on_filter.run(committed);
    };

    view! {
        <form class="filter-form" on:submit=submit>
            <input
                type="text"
                name="filter"
                placeholder="input filter..."
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_value.set(input.value());
                }
            />
            <button type="submit" prop:disabled=move || disabled.get()>"Set filter"</button>
        </form>
    }
}
