//! Leaf numeric helpers shared by the evasion and swarm subsystems

/// Substituted for a pointer-to-center distance of zero before normalizing.
pub const EPSILON_DIST: f32 = 0.001;

/// Clamp `v` into `[min, max]`, collapsing to `min` when the range is empty.
///
/// `f32::clamp` panics on an inverted range; here a viewport smaller than the
/// element plus padding must yield the lower bound instead.
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    v.min(max).max(min)
}
