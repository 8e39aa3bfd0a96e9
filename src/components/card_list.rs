//! Card List Component
//!
//! Fetches the posts batch once, then renders the filtered, toggleable list.
//! Loading / Error / Loaded is tracked explicitly; the filtered view and its
//! counts are recomputed whenever the cards or the filter change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::Card;
use crate::filtering;
use crate::models::{CardCounts, CardsState};

#[component]
pub fn CardList(
    /// Committed filter substring (case-sensitive). Changes re-filter the
    /// already loaded batch; they never re-fetch.
    #[prop(into)]
    filter: Signal<String>,
    /// Fired once, after the initial fetch resolves successfully.
    on_loaded: Callback<()>,
    /// Receives the derived counts after every completed list render.
    set_counts: WriteSignal<CardCounts>,
) -> impl IntoView {
    let (state, set_state) = signal(CardsState::Loading);

    // One fetch per mount.
    spawn_local(async move {
        let result = api::fetch_posts().await;
        if let Err(err) = &result {
            log::error!("loading cards failed: {err}");
        }

        let next = filtering::settle(result);
        let loaded = matches!(next, CardsState::Loaded(_));
        set_state.set(next);
        if loaded {
            on_loaded.run(());
        }
    });

    let view_result = Memo::new(move |_| match state.get() {
        CardsState::Loaded(cards) => Some(filtering::build_view(&cards, &filter.get())),
        CardsState::Loading | CardsState::Error(_) => None,
    });

    // Counts are projected out after each recomputation. A view that fails
    // to build demotes the list to the error state; this is a defensive
    // fallback, not an expected path.
    Effect::new(move |_| match view_result.get() {
        Some(Ok(view)) => set_counts.set(view.counts),
        Some(Err(err)) => {
            log::error!("building the card view failed: {err}");
            set_state.set(CardsState::Error(err.to_string()));
        }
        None => {}
    });

    let toggle = move |id: u32, active: bool| {
        set_state.update(|state| {
            if let CardsState::Loaded(cards) = state {
                filtering::toggle_active(cards, id, active);
            }
        });
    };

    view! {
        <section class="cards">
            {move || match state.get() {
                CardsState::Loading => view! { <p class="cards-loading">"Loading..."</p> }.into_any(),
                CardsState::Error(message) => {
                    let message = if message.is_empty() {
                        "Something went wrong".to_string()
                    } else {
                        message
                    };
                    view! { <p class="cards-error">"Error: " {message}</p> }.into_any()
                }
                CardsState::Loaded(_) => match view_result.get() {
                    Some(Ok(view)) if view.cards.is_empty() => {
                        view! { <p class="cards-empty">"There are no cards"</p> }.into_any()
                    }
                    Some(Ok(view)) => view! {
                        <ul class="cards-list">
                            {view.cards.into_iter().map(|card| {
                                let id = card.post.id;
                                let checked = card.is_active;
                                view! {
                                    <Card title=card.post.title content=card.post.body>
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                toggle(id, input.checked());
                                            }
                                        />
                                    </Card>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any(),
                    // The effect above flips the state to Error right after
                    // this render.
                    Some(Err(err)) => {
                        view! { <p class="cards-error">"Error: " {err.to_string()}</p> }.into_any()
                    }
                    None => ().into_any(),
                },
            }}
        </section>
    }
}
