//! Confetti trigger. The effect itself is host-side: `index.html` defines
//! `window.launchCardConfetti`, and this module only serializes the launch
//! options and re-fires the binding whenever the run counter changes, so a
//! repeat "Yes" click restarts a finished burst instead of no-opping.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

pub const DEFAULT_PARTICLE_COUNT: u32 = 700;

#[wasm_bindgen]
extern "C" {
    // Must match the function defined in index.html
    #[wasm_bindgen(js_namespace = window, js_name = launchCardConfetti)]
    fn launch_card_confetti(opts_json: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfettiArea {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfettiConfig {
    pub particle_count: u32,
    pub area: ConfettiArea,
    pub active: bool,
    pub recycle: bool,
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Bumped once per affirmative click; each bump re-arms the effect.
    pub run: u32,
    pub active: bool,
    pub width: f64,
    pub height: f64,
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let config = ConfettiConfig {
        particle_count: DEFAULT_PARTICLE_COUNT,
        area: ConfettiArea { width: props.width, height: props.height },
        active: props.active,
        recycle: false,
    };

    use_effect_with(props.run, move |_| {
        if config.active {
            match serde_json::to_string(&config) {
                Ok(json) => launch_card_confetti(&json),
                Err(e) => log::warn!("confetti options failed to serialize: {e}"),
            }
        }
        || ()
    });

    // The canvas the host function draws on lives outside the Yew tree.
    html! {}
}
