//! Platform-agnostic reduced-motion preference
//!
//! Consulted once at startup; when set, the ambient swarm is never built.

/// Browser: `prefers-reduced-motion: reduce` media query.
#[cfg(target_arch = "wasm32")]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Native preview: `REDUCED_MOTION` env var stands in for the media query.
#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_reduced_motion() -> bool {
    std::env::var("REDUCED_MOTION").is_ok_and(|v| v != "0" && !v.is_empty())
}
