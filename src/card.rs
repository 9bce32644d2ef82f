//! The greeting card itself: question, the button row with the evading "No"
//! button, and the celebration view once "Yes" is clicked.

use glam::DVec2;
use yew::prelude::*;

use crate::config::CardConfig;
use crate::evasion::EvasionController;
use crate::geometry::{GeometryProvider, Rect};

/// Which side of the card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Asking,
    Celebrating,
}

/// Pure state behind the card: the asking/celebrating phase machine plus the
/// evasion controller whose offset clears when the card returns to asking.
/// The component's callbacks only delegate here, so both transitions are
/// testable without a DOM.
#[derive(Debug, Default)]
pub struct CardState {
    phase: Phase,
    evasion: EvasionController,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn offset(&self) -> DVec2 {
        self.evasion.offset()
    }

    pub fn evasion_mut(&mut self) -> &mut EvasionController {
        &mut self.evasion
    }

    /// Affirmative click: one-way hop to celebrating. Returns whether the
    /// confetti trigger should fire; every click re-arms the burst, so this
    /// stays true when already celebrating.
    pub fn confirm(&mut self) -> bool {
        self.phase = Phase::Celebrating;
        true
    }

    /// Reset control: back to asking with the avoider at its natural
    /// position. While already asking this is a no-op and the offset keeps
    /// whatever value it had.
    pub fn reset(&mut self) {
        if self.phase == Phase::Celebrating {
            self.evasion.reset();
            self.phase = Phase::Asking;
        }
    }
}

/// Live geometry backed by `getBoundingClientRect` on the mounted nodes.
/// Before first mount the casts fail and reads come back `None`, which the
/// controller treats as "skip this event".
#[derive(Clone)]
struct DomGeometry {
    container: NodeRef,
    avoider: NodeRef,
    affirmative: NodeRef,
}

fn rect_of(node: &NodeRef) -> Option<Rect> {
    let el = node.cast::<web_sys::Element>()?;
    let r = el.get_bounding_client_rect();
    Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
}

impl GeometryProvider for DomGeometry {
    fn container_rect(&self) -> Option<Rect> {
        rect_of(&self.container)
    }
    fn avoider_rect(&self) -> Option<Rect> {
        rect_of(&self.avoider)
    }
    fn affirmative_rect(&self) -> Option<Rect> {
        rect_of(&self.affirmative)
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub config: CardConfig,
    #[prop_or_default]
    pub on_affirmative: Callback<()>,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let state = use_mut_ref(CardState::new);
    let phase = use_state(|| Phase::Asking);
    let offset = use_state(|| DVec2::ZERO);

    let row_ref = use_node_ref();
    let no_ref = use_node_ref();
    let yes_ref = use_node_ref();

    let geometry = DomGeometry {
        container: row_ref.clone(),
        avoider: no_ref.clone(),
        affirmative: yes_ref.clone(),
    };

    let on_row_mouse_move = {
        let state = state.clone();
        let offset = offset.clone();
        let geometry = geometry.clone();
        Callback::from(move |e: MouseEvent| {
            let pointer = DVec2::new(e.client_x() as f64, e.client_y() as f64);
            let mut s = state.borrow_mut();
            if s.evasion_mut().on_proximity(pointer, js_sys::Date::now(), &geometry) {
                offset.set(s.offset());
            }
        })
    };

    // Fast pointers can land on the button without tripping the proximity
    // threshold; mouseenter forces a relocation.
    let on_no_mouse_enter = {
        let state = state.clone();
        let offset = offset.clone();
        Callback::from(move |e: MouseEvent| {
            let pointer = DVec2::new(e.client_x() as f64, e.client_y() as f64);
            let mut s = state.borrow_mut();
            if s.evasion_mut().on_direct_entry(pointer, &geometry, js_sys::Math::random) {
                log::debug!("forced relocation to {:?}", s.offset());
                offset.set(s.offset());
            } else {
                log::debug!("forced relocation skipped, geometry not ready");
            }
        })
    };

    // A click that somehow lands must never confirm anything.
    let on_no_click = Callback::from(|e: MouseEvent| e.prevent_default());

    let on_yes_click = {
        let state = state.clone();
        let phase = phase.clone();
        let on_affirmative = props.on_affirmative.clone();
        Callback::from(move |_: MouseEvent| {
            let fire = {
                let mut s = state.borrow_mut();
                let fire = s.confirm();
                phase.set(s.phase());
                fire
            };
            if fire {
                on_affirmative.emit(());
            }
        })
    };

    let on_reset_click = {
        let state = state.clone();
        let phase = phase.clone();
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| {
            let mut s = state.borrow_mut();
            s.reset();
            phase.set(s.phase());
            offset.set(s.offset());
        })
    };

    let cfg = &props.config;
    let no_style = format!("transform: translate({:.2}px, {:.2}px);", offset.x, offset.y);

    html! {
        <div class="card">
            <img class="cardMedia" src={cfg.ask_image.clone()} alt={cfg.ask_image_alt.clone()} />
            <p class="question">{ cfg.question.clone() }</p>
            {
                if *phase == Phase::Asking {
                    html! {
                        <>
                            <div class="btnRow" ref={row_ref} onmousemove={on_row_mouse_move}>
                                <button
                                    ref={yes_ref}
                                    class="btn yes"
                                    onclick={on_yes_click}
                                >
                                    { "Yes" }
                                </button>
                                <button
                                    ref={no_ref}
                                    class="btn no"
                                    style={no_style}
                                    onclick={on_no_click}
                                    onmouseenter={on_no_mouse_enter}
                                >
                                    { "No" }
                                </button>
                            </div>
                            <p class="hint">{ cfg.ask_hint.clone() }</p>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <img
                                class="cardMedia"
                                src={cfg.celebrate_image.clone()}
                                alt={cfg.celebrate_image_alt.clone()}
                            />
                            <p class="celebrateTitle">{ cfg.celebrate_title.clone() }</p>
                            <p class="celebrateMessage">{ cfg.celebrate_message.clone() }</p>
                            <div class="btnRow">
                                <button class="btn" onclick={on_reset_click}>
                                    { cfg.reset_label.clone() }
                                </button>
                            </div>
                        </>
                    }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RowGeometry;

    impl GeometryProvider for RowGeometry {
        fn container_rect(&self) -> Option<Rect> {
            Some(Rect::new(0.0, 0.0, 400.0, 120.0))
        }
        fn avoider_rect(&self) -> Option<Rect> {
            Some(Rect::new(220.0, 40.0, 80.0, 36.0))
        }
        fn affirmative_rect(&self) -> Option<Rect> {
            Some(Rect::new(20.0, 40.0, 60.0, 36.0))
        }
    }

    /// Drives one dodge so the avoider sits away from its natural position.
    fn dodge(state: &mut CardState) {
        let pointer = DVec2::new(250.0, 58.0);
        assert!(state.evasion_mut().on_proximity(pointer, 1_000.0, &RowGeometry));
        assert_ne!(state.offset(), DVec2::ZERO);
    }

    #[test]
    fn affirmative_click_celebrates_and_fires_the_trigger() {
        let mut state = CardState::new();
        assert_eq!(state.phase(), Phase::Asking);

        assert!(state.confirm());
        assert_eq!(state.phase(), Phase::Celebrating);
    }

    #[test]
    fn repeat_affirmative_clicks_rearm_the_trigger() {
        let mut state = CardState::new();
        assert!(state.confirm());
        assert!(state.confirm());
        assert_eq!(state.phase(), Phase::Celebrating);
    }

    #[test]
    fn reset_from_celebrating_returns_to_asking_with_zero_offset() {
        let mut state = CardState::new();
        dodge(&mut state);
        state.confirm();

        state.reset();
        assert_eq!(state.phase(), Phase::Asking);
        assert_eq!(state.offset(), DVec2::ZERO);
    }

    #[test]
    fn reset_while_asking_changes_nothing() {
        let mut state = CardState::new();
        dodge(&mut state);
        let offset = state.offset();

        state.reset();
        assert_eq!(state.phase(), Phase::Asking);
        assert_eq!(state.offset(), offset);
    }
}
