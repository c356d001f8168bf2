//! Particle data and the per-frame swarm update

use std::collections::VecDeque;

use egui::{pos2, vec2, Pos2, Rect, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::util::clamp;

/// Hard population cap; exceeding it discards the oldest particle.
pub const MAX_PARTICLES: usize = 120;

/// Frame delta cap - keeps the first frame after a tab-resume stable.
pub const MAX_FRAME_DT: f32 = 0.033;

/// Spawn probability per frame
const SPAWN_CHANCE: f64 = 0.95;
/// Hearts vs sparks, weighted ~3:1
const HEART_WEIGHT: f64 = 0.75;
/// Velocities are tuned in px-per-frame at 60 fps
const FRAME_RATE_SCALE: f32 = 60.0;
/// Particles retiring above the viewport top by this much are gone for good
const OFFSCREEN_MARGIN: f32 = 140.0;
/// Fraction of life spent fading in, and again fading out
const FADE_FRACTION: f32 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Heart,
    Spark,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub kind: ParticleKind,
    pub pos: Pos2,
    pub vel: Vec2,
    pub size: f32,
    pub rot: f32,
    pub rot_vel: f32,
    /// Peak opacity; the effective value is always derived via [`Self::alpha`]
    pub base_alpha: f32,
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    /// Fade envelope over normalized life: linear in over the first 15%,
    /// full through 85%, linear out over the last 15%.
    pub fn fade(t: f32) -> f32 {
        if t < FADE_FRACTION {
            t / FADE_FRACTION
        } else if t > 1.0 - FADE_FRACTION {
            (1.0 - t) / FADE_FRACTION
        } else {
            1.0
        }
    }

    /// This frame's effective opacity.
    pub fn alpha(&self) -> f32 {
        self.base_alpha * Self::fade(clamp(self.life / self.max_life, 0.0, 1.0))
    }

    fn retired(&self, viewport_top: f32) -> bool {
        self.life >= self.max_life || self.pos.y < viewport_top - OFFSCREEN_MARGIN
    }
}

/// The active particle collection plus its RNG.
pub struct Swarm {
    particles: VecDeque<Particle>,
    rng: StdRng,
}

impl Default for Swarm {
    fn default() -> Self {
        Self::new()
    }
}

impl Swarm {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: VecDeque::with_capacity(MAX_PARTICLES),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// One animation step: roll a spawn, advance everything, retire the dead.
    pub fn advance(&mut self, dt: f32, viewport: Rect) {
        let dt = clamp(dt, 0.0, MAX_FRAME_DT);

        if self.rng.gen_bool(SPAWN_CHANCE) {
            self.spawn(viewport);
        }

        for p in &mut self.particles {
            p.life += dt;
            p.pos += p.vel * FRAME_RATE_SCALE * dt;
            p.rot += p.rot_vel * FRAME_RATE_SCALE * dt;
        }

        let top = viewport.min.y;
        self.particles.retain(|p| !p.retired(top));
    }

    /// Spawn one particle in the bottom region, drifting upward.
    fn spawn(&mut self, viewport: Rect) {
        let rng = &mut self.rng;

        let kind = if rng.gen_bool(HEART_WEIGHT) {
            ParticleKind::Heart
        } else {
            ParticleKind::Spark
        };
        let (size, base_alpha) = match kind {
            ParticleKind::Heart => (rng.gen_range(10.0..18.0), rng.gen_range(0.05..0.13)),
            ParticleKind::Spark => (rng.gen_range(2.0..4.0), rng.gen_range(0.06..0.16)),
        };

        let particle = Particle {
            kind,
            pos: pos2(
                viewport.min.x + rng.gen::<f32>() * viewport.width(),
                viewport.max.y + rng.gen_range(20.0..140.0),
            ),
            vel: vec2(rng.gen_range(-0.22..0.22), rng.gen_range(-0.95..-0.45)),
            size,
            rot: rng.gen_range(-0.5..0.5),
            rot_vel: rng.gen_range(-0.012..0.012),
            base_alpha,
            life: 0.0,
            max_life: rng.gen_range(7.0..12.0),
        };

        if self.particles.len() >= MAX_PARTICLES {
            self.particles.pop_front();
        }
        self.particles.push_back(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 800.0))
    }

    fn swarm() -> Swarm {
        Swarm::with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn fade_envelope_endpoints() {
        assert_eq!(Particle::fade(0.0), 0.0);
        assert!((Particle::fade(1.0)).abs() < 1e-6);
        assert_eq!(Particle::fade(0.5), 1.0);
        assert!((Particle::fade(0.15) - 1.0).abs() < 1e-6);
        assert!((Particle::fade(0.075) - 0.5).abs() < 1e-6);
        assert!((Particle::fade(0.925) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn alpha_is_zero_at_birth() {
        let mut s = swarm();
        for _ in 0..10 {
            s.advance(0.0, viewport());
        }
        // dt of zero means every particle still sits at life == 0
        for p in s.iter() {
            assert_eq!(p.life, 0.0);
            assert_eq!(p.alpha(), 0.0);
        }
    }

    #[test]
    fn life_stays_within_bounds_every_frame() {
        let mut s = swarm();
        for _ in 0..2000 {
            s.advance(0.016, viewport());
            for p in s.iter() {
                assert!(p.life >= 0.0);
                assert!(p.life < p.max_life, "retired particle survived");
            }
        }
    }

    #[test]
    fn population_never_exceeds_cap() {
        let mut s = swarm();
        for _ in 0..500 {
            // zero dt: nothing ever retires, only the cap limits growth
            s.advance(0.0, viewport());
            assert!(s.len() <= MAX_PARTICLES);
        }
        assert_eq!(s.len(), MAX_PARTICLES);
    }

    #[test]
    fn cap_evicts_the_oldest_first() {
        let mut s = swarm();
        while s.len() < MAX_PARTICLES {
            s.advance(0.0, viewport());
        }
        let oldest = s.iter().next().unwrap().pos;
        let len_before = s.len();
        while s.len() == len_before {
            let front_before = s.iter().next().unwrap().pos;
            s.advance(0.0, viewport());
            if s.iter().next().unwrap().pos != front_before {
                // a spawn happened and pushed the front out
                break;
            }
        }
        assert_ne!(s.iter().next().unwrap().pos, oldest);
        assert_eq!(s.len(), MAX_PARTICLES);
    }

    #[test]
    fn dt_is_capped_for_tab_resume() {
        let mut s = swarm();
        s.advance(5.0, viewport());
        for p in s.iter() {
            assert!(p.life <= MAX_FRAME_DT);
        }
    }

    #[test]
    fn spawn_ranges_per_kind() {
        let mut s = swarm();
        for _ in 0..400 {
            s.advance(0.0, viewport());
        }
        let vp = viewport();
        let mut hearts = 0usize;
        for p in s.iter() {
            assert!(p.pos.x >= vp.min.x && p.pos.x <= vp.max.x);
            assert!(p.pos.y >= vp.max.y + 20.0 && p.pos.y <= vp.max.y + 140.0);
            assert!(p.vel.y < 0.0, "spawned drifting downward");
            assert!(p.max_life >= 7.0 && p.max_life < 12.0);
            match p.kind {
                ParticleKind::Heart => {
                    hearts += 1;
                    assert!(p.size >= 10.0 && p.size < 18.0);
                    assert!(p.base_alpha >= 0.05 && p.base_alpha < 0.13);
                }
                ParticleKind::Spark => {
                    assert!(p.size >= 2.0 && p.size < 4.0);
                    assert!(p.base_alpha >= 0.06 && p.base_alpha < 0.16);
                }
            }
        }
        // weighted 3:1 - with 120 particles hearts must dominate
        assert!(hearts > s.len() / 2);
    }

    #[test]
    fn rising_offscreen_retires_a_particle() {
        // a short viewport lets fast particles cross the top before life ends
        let short = Rect::from_min_size(Pos2::ZERO, vec2(400.0, 100.0));
        let mut s = swarm();
        for _ in 0..2000 {
            s.advance(0.033, short);
            for p in s.iter() {
                assert!(p.pos.y >= short.min.y - 140.0, "offscreen particle kept");
            }
        }
    }
}
