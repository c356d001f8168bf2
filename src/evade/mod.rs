//! Runaway button evasion
//!
//! Keeps registered targets away from the mouse pointer inside viewport
//! bounds. Pure geometry lives here; the egui layer reserves each target's
//! original flow footprint with a placeholder and draws the real widget on a
//! foreground overlay at the controller's position.

mod target;

pub use target::{EvadeController, EvadeTarget, EvadeTunables, RepelOutcome};
