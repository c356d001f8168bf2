//! Evasion targets and the pointer-avoidance controller

use egui::{pos2, vec2, Pos2, Rect, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::util::{clamp, EPSILON_DIST};

/// Build-time tuning for the evasion behavior.
#[derive(Clone, Copy, Debug)]
pub struct EvadeTunables {
    /// Pointer distance (px) below which the target starts fleeing
    pub trigger_radius: f32,
    /// After a push the center must end up at least this far from the pointer,
    /// otherwise the target teleports to a sampled position
    pub min_safe_dist: f32,
    /// Screen margin kept on every side
    pub pad: f32,
    /// Base displacement applied on every push
    pub escape_boost: f32,
    /// Extra displacement at zero distance; scales linearly with closeness
    pub push_scale: f32,
    /// Candidate positions drawn before falling back to the top-left corner
    pub relocate_tries: u32,
}

impl Default for EvadeTunables {
    fn default() -> Self {
        Self {
            trigger_radius: 330.0,
            min_safe_dist: 120.0,
            pad: 14.0,
            escape_boost: 1.0,
            push_scale: 420.0,
            relocate_tries: 25,
        }
    }
}

/// What a `repel_from` call did to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepelOutcome {
    /// Pointer was outside the trigger radius; position untouched
    Idle,
    /// Displaced along the pointer→center vector and re-clamped
    Pushed,
    /// Cornered; teleported via rejection sampling
    Relocated,
}

/// One evading widget: authoritative overlay position plus live layout size.
#[derive(Clone, Copy, Debug)]
pub struct EvadeTarget {
    pos: Pos2,
    home: Pos2,
    size: Vec2,
}

impl EvadeTarget {
    fn new(flow_rect: Rect) -> Self {
        // seeded from the flow rect, offset slightly upward
        let home = flow_rect.min - vec2(0.0, 10.0);
        Self {
            pos: home,
            home,
            size: flow_rect.size(),
        }
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    /// Flow position captured at registration.
    pub fn home(&self) -> Pos2 {
        self.home
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn center(&self) -> Pos2 {
        self.pos + self.size * 0.5
    }
}

/// Owns the registered targets, the tunables, and the sampling RNG.
///
/// `set_position` is the sole mutator of target positions; every other
/// operation routes through it so the clamping invariant always holds.
pub struct EvadeController {
    targets: Vec<EvadeTarget>,
    tunables: EvadeTunables,
    rng: StdRng,
}

impl Default for EvadeController {
    fn default() -> Self {
        Self::new()
    }
}

impl EvadeController {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            targets: Vec::new(),
            tunables: EvadeTunables::default(),
            rng,
        }
    }

    pub fn tunables(&self) -> &EvadeTunables {
        &self.tunables
    }

    /// Register a target from its flow rect; returns its handle.
    pub fn register(&mut self, flow_rect: Rect, viewport: Rect) -> usize {
        let target = EvadeTarget::new(flow_rect);
        let seed = target.pos;
        let id = self.targets.len();
        self.targets.push(target);
        self.set_position(id, seed, viewport);
        debug!(id, ?seed, "evasion target registered");
        id
    }

    pub fn get(&self, id: usize) -> Option<&EvadeTarget> {
        self.targets.get(id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Record the target's live layout size (placeholder footprint).
    pub fn update_size(&mut self, id: usize, size: Vec2) {
        if let Some(target) = self.targets.get_mut(id) {
            target.size = size;
        }
    }

    /// Clamp `p` into `[pad, viewport − size − pad]` per axis and store it.
    /// Unknown ids are a silent no-op.
    pub fn set_position(&mut self, id: usize, p: Pos2, viewport: Rect) {
        let pad = self.tunables.pad;
        if let Some(target) = self.targets.get_mut(id) {
            target.pos = pos2(
                clamp(p.x, viewport.min.x + pad, viewport.max.x - target.size.x - pad),
                clamp(p.y, viewport.min.y + pad, viewport.max.y - target.size.y - pad),
            );
        }
    }

    /// Flee from the pointer when it is inside the trigger radius.
    ///
    /// The push grows as the pointer closes in; if the clamped result still
    /// leaves the center within the safe distance (cornered against a bound),
    /// the target teleports via rejection sampling instead.
    pub fn repel_from(&mut self, id: usize, pointer: Pos2, viewport: Rect) -> RepelOutcome {
        let Some(target) = self.targets.get(id) else {
            return RepelOutcome::Idle;
        };
        let tun = self.tunables;

        let center = target.center();
        let delta = center - pointer;
        let dist = delta.length().max(EPSILON_DIST);
        if dist > tun.trigger_radius {
            return RepelOutcome::Idle;
        }

        // closer pointer, harder push
        let closeness = (tun.trigger_radius - dist) / tun.trigger_radius;
        let push = tun.escape_boost + closeness * tun.push_scale;
        let next = target.pos + (delta / dist) * push;
        self.set_position(id, next, viewport);

        let center = self.targets[id].center();
        if (center - pointer).length() < tun.min_safe_dist {
            self.relocate_away_from(id, pointer, viewport);
            return RepelOutcome::Relocated;
        }
        RepelOutcome::Pushed
    }

    /// Teleport to a random in-bounds position whose center clears the safe
    /// distance; after `relocate_tries` failures, settle on the top-left-most
    /// valid position.
    pub fn relocate_away_from(&mut self, id: usize, pointer: Pos2, viewport: Rect) {
        let Some(target) = self.targets.get(id) else {
            return;
        };
        let tun = self.tunables;
        let size = target.size;

        let min = viewport.min + vec2(tun.pad, tun.pad);
        let max = pos2(
            (viewport.max.x - size.x - tun.pad).max(min.x),
            (viewport.max.y - size.y - tun.pad).max(min.y),
        );

        for _ in 0..tun.relocate_tries {
            let candidate = pos2(
                sample_axis(&mut self.rng, min.x, max.x),
                sample_axis(&mut self.rng, min.y, max.y),
            );
            let center = candidate + size * 0.5;
            if (center - pointer).length() > tun.min_safe_dist {
                self.set_position(id, candidate, viewport);
                return;
            }
        }
        self.set_position(id, min, viewport);
    }

    /// Re-clamp every target into the new bounds; does not otherwise move them.
    pub fn handle_resize(&mut self, viewport: Rect) {
        for id in 0..self.targets.len() {
            let pos = self.targets[id].pos;
            self.set_position(id, pos, viewport);
        }
    }
}

fn sample_axis(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BTN: Vec2 = vec2(160.0, 48.0);

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(1920.0, 1080.0))
    }

    fn controller_with_target() -> (EvadeController, usize) {
        let mut ctl = EvadeController::with_rng(StdRng::seed_from_u64(7));
        let id = ctl.register(
            Rect::from_min_size(pos2(800.0, 500.0), BTN),
            viewport(),
        );
        (ctl, id)
    }

    #[test]
    fn register_seeds_above_flow_position() {
        let (ctl, id) = controller_with_target();
        let target = ctl.get(id).unwrap();
        assert_eq!(target.pos(), pos2(800.0, 490.0));
        assert_eq!(target.home(), pos2(800.0, 490.0));
        assert_eq!(target.size(), BTN);
    }

    #[test]
    fn set_position_clamps_any_input() {
        let (mut ctl, id) = controller_with_target();
        let pad = ctl.tunables().pad;
        let vp = viewport();

        for p in [
            pos2(-500.0, -500.0),
            pos2(5000.0, 5000.0),
            pos2(f32::MIN, f32::MAX),
            pos2(300.0, 900.0),
        ] {
            ctl.set_position(id, p, vp);
            let pos = ctl.get(id).unwrap().pos();
            assert!(pos.x >= pad && pos.x <= vp.max.x - BTN.x - pad, "{pos:?}");
            assert!(pos.y >= pad && pos.y <= vp.max.y - BTN.y - pad, "{pos:?}");
        }
    }

    #[test]
    fn set_position_degenerate_viewport_collapses_to_pad() {
        let (mut ctl, id) = controller_with_target();
        // viewport narrower than the button plus padding
        let tiny = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 30.0));
        ctl.set_position(id, pos2(900.0, 900.0), tiny);
        assert_eq!(ctl.get(id).unwrap().pos(), pos2(14.0, 14.0));
    }

    #[test]
    fn far_pointer_is_idle() {
        let (mut ctl, id) = controller_with_target();
        let before = ctl.get(id).unwrap().pos();
        let center = ctl.get(id).unwrap().center();
        let pointer = center + vec2(331.0, 0.0);

        let outcome = ctl.repel_from(id, pointer, viewport());
        assert_eq!(outcome, RepelOutcome::Idle);
        assert_eq!(ctl.get(id).unwrap().pos(), before);
    }

    #[test]
    fn near_pointer_ends_safe_or_relocated() {
        let (mut ctl, id) = controller_with_target();
        let min_safe = ctl.tunables().min_safe_dist;

        for off in [vec2(10.0, 0.0), vec2(-80.0, 40.0), vec2(0.0, 200.0), vec2(-300.0, -90.0)] {
            let pointer = ctl.get(id).unwrap().center() + off;
            match ctl.repel_from(id, pointer, viewport()) {
                RepelOutcome::Idle => panic!("pointer at {off:?} should trigger"),
                RepelOutcome::Pushed => {
                    let dist = (ctl.get(id).unwrap().center() - pointer).length();
                    assert!(dist >= min_safe, "pushed but still at {dist}");
                }
                RepelOutcome::Relocated => {}
            }
        }
    }

    #[test]
    fn push_grows_as_pointer_closes_in() {
        let vp = viewport();
        let mut far = EvadeController::with_rng(StdRng::seed_from_u64(1));
        let mut near = EvadeController::with_rng(StdRng::seed_from_u64(1));
        let flow = Rect::from_min_size(pos2(800.0, 500.0), BTN);
        let id_far = far.register(flow, vp);
        let id_near = near.register(flow, vp);
        let center = far.get(id_far).unwrap().center();

        far.repel_from(id_far, center + vec2(300.0, 0.0), vp);
        near.repel_from(id_near, center + vec2(150.0, 0.0), vp);

        let moved_far = (far.get(id_far).unwrap().center() - center).length();
        let moved_near = (near.get(id_near).unwrap().center() - center).length();
        assert!(moved_near > moved_far, "{moved_near} <= {moved_far}");
    }

    #[test]
    fn cornered_zero_distance_relocates_to_safety() {
        let (mut ctl, id) = controller_with_target();
        let vp = viewport();
        let min_safe = ctl.tunables().min_safe_dist;

        // pin the target into the top-left corner, pointer dead on its center
        ctl.set_position(id, pos2(-1000.0, -1000.0), vp);
        let pointer = ctl.get(id).unwrap().center();

        let outcome = ctl.repel_from(id, pointer, vp);
        assert_eq!(outcome, RepelOutcome::Relocated);
        let dist = (ctl.get(id).unwrap().center() - pointer).length();
        assert!(dist >= min_safe, "relocated center only {dist} away");
    }

    #[test]
    fn relocate_stays_in_bounds() {
        let (mut ctl, id) = controller_with_target();
        let vp = viewport();
        let pad = ctl.tunables().pad;

        for i in 0..50 {
            let pointer = pos2(40.0 * i as f32 % 1900.0, 23.0 * i as f32 % 1060.0);
            ctl.relocate_away_from(id, pointer, vp);
            let pos = ctl.get(id).unwrap().pos();
            assert!(pos.x >= pad && pos.x <= vp.max.x - BTN.x - pad);
            assert!(pos.y >= pad && pos.y <= vp.max.y - BTN.y - pad);
        }
    }

    #[test]
    fn resize_reclamps_last_position() {
        let (mut ctl, id) = controller_with_target();
        ctl.set_position(id, pos2(1800.0, 1000.0), viewport());

        let shrunk = Rect::from_min_size(Pos2::ZERO, vec2(400.0, 600.0));
        ctl.handle_resize(shrunk);

        let pos = ctl.get(id).unwrap().pos();
        assert!(pos.x <= 400.0 - BTN.x - 14.0, "{pos:?}");
        assert!(pos.y <= 600.0 - BTN.y - 14.0, "{pos:?}");
        assert!(pos.x >= 14.0 && pos.y >= 14.0, "{pos:?}");
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let (mut ctl, _) = controller_with_target();
        let vp = viewport();
        assert_eq!(ctl.repel_from(99, pos2(0.0, 0.0), vp), RepelOutcome::Idle);
        ctl.set_position(99, pos2(1.0, 1.0), vp);
        ctl.relocate_away_from(99, pos2(1.0, 1.0), vp);
        assert_eq!(ctl.len(), 1);
    }
}
