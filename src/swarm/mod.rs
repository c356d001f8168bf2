//! Ambient heart & spark swarm
//!
//! A continuously evolving, non-interactive drift of decorative shapes
//! painted behind the page content. Owns its particles and RNG; nothing
//! outside this module reads or mutates them.

mod data;
mod renderer;

pub use data::{Particle, ParticleKind, Swarm, MAX_FRAME_DT, MAX_PARTICLES};
pub use renderer::paint;
