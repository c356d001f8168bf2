//! The invitation page app
//!
//! One frame callback drives both visual subsystems: the evasion controller
//! behind the runaway button and the ambient swarm behind the content. They
//! touch disjoint state, so their per-frame order does not matter.

mod hero;
mod programme;
mod toast;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::evade::EvadeController;
use crate::swarm::{self, Swarm};
use crate::theme::colors;
use crate::time::now_seconds;

use hero::Ripple;
use toast::Toast;

pub struct FxApp {
    /// Ambient swarm - `None` when the host prefers reduced motion
    swarm: Option<Swarm>,
    evade: EvadeController,
    /// Handle of the runaway button, set on first hero layout
    runaway_id: Option<usize>,
    ripples: Vec<Ripple>,
    toast: Option<Toast>,
    /// Start time of the decorative button's shake, if one is running
    shake_started: Option<f64>,
    programme_open: bool,
    scroll_programme: bool,
    /// Page-level randomness (toast message picking)
    rng: StdRng,
    /// Viewport of the previous frame, for resize re-clamping
    last_viewport: egui::Rect,
    frames_this_tick: u32,
    stats_last_tick: f64,
}

impl FxApp {
    #[cfg(feature = "eframe")]
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(crate::theme::page_visuals());
        let reduced = crate::motion::prefers_reduced_motion();
        info!(reduced_motion = reduced, "page effects starting");
        Self::with_reduced_motion(reduced)
    }

    /// Build the app for a given motion preference.
    pub fn with_reduced_motion(reduced_motion: bool) -> Self {
        Self {
            swarm: init_swarm(reduced_motion),
            evade: EvadeController::new(),
            runaway_id: None,
            ripples: Vec::new(),
            toast: None,
            shake_started: None,
            programme_open: false,
            scroll_programme: false,
            rng: StdRng::from_entropy(),
            last_viewport: egui::Rect::NOTHING,
            frames_this_tick: 0,
            stats_last_tick: 0.0,
        }
    }

    /// Replace any current toast and restart its timer.
    pub(crate) fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some(Toast::new(text.into(), now_seconds()));
    }

    /// Number of live ambient particles (0 with reduced motion).
    pub fn particle_count(&self) -> usize {
        self.swarm.as_ref().map_or(0, Swarm::len)
    }

    fn anything_animating(&self) -> bool {
        self.swarm.is_some()
            || self.toast.is_some()
            || self.shake_started.is_some()
            || !self.ripples.is_empty()
    }

    /// One full page frame. Everything the app mutates, it mutates here.
    pub fn run_frame(&mut self, ctx: &egui::Context) {
        let now = now_seconds();
        let viewport = ctx.screen_rect();
        let dt = ctx.input(|i| i.unstable_dt);

        // window size changed: re-clamp evasion targets, nothing else moves
        if viewport != self.last_viewport {
            self.evade.handle_resize(viewport);
            self.last_viewport = viewport;
        }

        if let Some(swarm) = &mut self.swarm {
            swarm.advance(dt, viewport);
        }

        // expire transient feedback; clearing already-gone state is a no-op
        self.ripples.retain(|r| now - r.started < hero::RIPPLE_DURATION);
        if self.toast.as_ref().is_some_and(|t| t.expired(now)) {
            self.toast = None;
        }
        if self
            .shake_started
            .is_some_and(|s| now - s >= hero::SHAKE_DURATION)
        {
            self.shake_started = None;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| {
                // the swarm paints first so every widget layers above it
                if let Some(swarm) = &self.swarm {
                    swarm::paint(ui.painter(), swarm);
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_hero(ui, now);
                    ui.add_space(32.0);
                    self.render_programme(ui, now);
                    ui.add_space(64.0);
                });
            });

        self.render_runaway(ctx, now);
        self.draw_ripples(ctx, now);
        self.draw_toast(ctx, now);

        self.frames_this_tick += 1;
        if now - self.stats_last_tick >= 1.0 {
            let elapsed = now - self.stats_last_tick;
            info!(
                particles = self.particle_count(),
                fps = format!("{:.0}", f64::from(self.frames_this_tick) / elapsed),
                "stats"
            );
            self.frames_this_tick = 0;
            self.stats_last_tick = now;
        }

        // idle when nothing animates - input events still repaint on their own
        if self.anything_animating() {
            ctx.request_repaint();
        }
    }
}

/// The swarm only exists when the host does not ask for reduced motion.
fn init_swarm(reduced_motion: bool) -> Option<Swarm> {
    (!reduced_motion).then(Swarm::new)
}

#[cfg(feature = "eframe")]
impl eframe::App for FxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}
