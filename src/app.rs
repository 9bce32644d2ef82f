//! Root component: loads the card copy, tracks the viewport for confetti
//! sizing, and re-arms the confetti burst on every affirmative click.

use gloo_events::EventListener;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::card::Card;
use crate::confetti::Confetti;
use crate::config::{fetch_card_config, CardConfig};

fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(CardConfig::default);
    let viewport = use_state(viewport_size);
    let confetti_run = use_state(|| 0u32);
    let confetti_active = use_state(|| false);

    // Load card.json once; on any failure the built-in copy stands.
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_card_config().await {
                    Ok(c) => config.set(c),
                    Err(e) => log::warn!("using built-in card copy: {e}"),
                }
            });
            || ()
        });
    }

    // Keep the confetti area matched to the live viewport.
    {
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|win| {
                EventListener::new(&win, "resize", move |_| viewport.set(viewport_size()))
            });
            move || drop(listener)
        });
    }

    let on_affirmative = {
        let confetti_run = confetti_run.clone();
        let confetti_active = confetti_active.clone();
        Callback::from(move |_| {
            confetti_active.set(true);
            // Fresh run identity so a finished burst restarts.
            confetti_run.set(*confetti_run + 1);
        })
    };

    let (width, height) = *viewport;

    html! {
        <main class="wrap">
            <Confetti run={*confetti_run} active={*confetti_active} {width} {height} />
            <Card config={(*config).clone()} on_affirmative={on_affirmative} />
        </main>
    }
}
