//! Evasion controller for the "No" button.
//!
//! Pure and deterministic: geometry comes in through [`GeometryProvider`],
//! timestamps and randomness are passed by the caller, and the only state is
//! the button's translation offset plus the last-move timestamp used for
//! debouncing. The presenter re-renders whenever a call reports a move.

use glam::DVec2;

use crate::geometry::{GeometryProvider, Rect};

/// How close the pointer may get (client px) before the button runs.
pub const MIN_DISTANCE: f64 = 60.0;
/// How far the button hops per relocation.
pub const MOVE_DISTANCE: f64 = 100.0;
/// Minimum gap between proximity-triggered relocations; prevents flicker.
pub const COOLDOWN_MS: f64 = 60.0;
/// Inset from the container edges the button must stay inside.
pub const EDGE_PADDING: f64 = 16.0;

/// Translation state of the avoider button.
#[derive(Debug, Clone, Default)]
pub struct EvasionController {
    offset: DVec2,
    last_move_ms: f64,
}

impl EvasionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current translation from the button's natural layout position.
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    /// Back to the natural position, as when the card returns to asking.
    pub fn reset(&mut self) {
        self.offset = DVec2::ZERO;
        self.last_move_ms = 0.0;
    }

    /// Pointer moved somewhere over the button row. Relocates when the pointer
    /// is inside the minimum distance or already within the button's own
    /// half-width, at most once per cooldown window. Returns whether the
    /// offset changed.
    pub fn on_proximity<G: GeometryProvider>(
        &mut self,
        pointer: DVec2,
        now_ms: f64,
        geom: &G,
    ) -> bool {
        let Some(rect) = geom.avoider_rect() else {
            return false;
        };

        if now_ms - self.last_move_ms < COOLDOWN_MS {
            return false;
        }

        let repulsion = rect.center() - pointer;
        let distance = repulsion.length();
        if distance > MIN_DISTANCE && distance > rect.width / 2.0 {
            return false;
        }

        self.last_move_ms = now_ms;
        self.relocate(repulsion, geom)
    }

    /// Pointer landed directly on the button (fast motion can skip past the
    /// proximity threshold). Relocates unconditionally; the cooldown stamp is
    /// zeroed so the next proximity event is not debounced either. `jitter`
    /// supplies a uniform sample in [0, 1) for the degenerate case where the
    /// pointer sits exactly on the button's center.
    pub fn on_direct_entry<G: GeometryProvider>(
        &mut self,
        pointer: DVec2,
        geom: &G,
        mut jitter: impl FnMut() -> f64,
    ) -> bool {
        let Some(rect) = geom.avoider_rect() else {
            return false;
        };

        let center = rect.center();
        let mut dx = center.x - pointer.x;
        let mut dy = center.y - pointer.y;
        if dx == 0.0 {
            dx = jitter() - 0.5;
        }
        if dy == 0.0 {
            dy = jitter() - 0.5;
        }

        self.last_move_ms = 0.0;
        self.relocate(DVec2::new(dx, dy), geom)
    }

    /// One fixed-magnitude hop away from the pointer: normalize the repulsion
    /// vector, step, clamp into the container's padded interior, then flip
    /// through the origin if the clamped spot would cover the "Yes" button.
    /// The flipped fallback is intentionally not re-clamped or re-checked.
    /// Reports whether the offset actually changed; a button pinned against
    /// the clamp edge stays put and must not force a re-render.
    fn relocate<G: GeometryProvider>(&mut self, repulsion: DVec2, geom: &G) -> bool {
        let (Some(container), Some(avoider), Some(affirmative)) = (
            geom.container_rect(),
            geom.avoider_rect(),
            geom.affirmative_rect(),
        ) else {
            return false;
        };

        let unit = repulsion.try_normalize().unwrap_or(repulsion);
        let candidate = self.offset + unit * MOVE_DISTANCE;

        // min-then-max so a container narrower than button + padding settles
        // on the padding edge instead of inverting the bounds.
        let max_x = container.width - avoider.width - EDGE_PADDING;
        let max_y = container.height - avoider.height - EDGE_PADDING;
        let mut next = DVec2::new(
            candidate.x.min(max_x).max(EDGE_PADDING),
            candidate.y.min(max_y).max(EDGE_PADDING),
        );

        let future = Rect::new(
            container.left + next.x,
            container.top + next.y,
            avoider.width,
            avoider.height,
        );
        if future.intersects(&affirmative) {
            next = -next;
        }

        let moved = next != self.offset;
        self.offset = next;
        moved
    }
}
