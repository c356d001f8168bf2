//! Toast overlay - bottom-anchored, replaced on re-show

use egui::RichText;

use super::FxApp;
use crate::theme::colors;

/// How long a toast stays up; re-showing restarts the clock.
pub(crate) const TOAST_DURATION: f64 = 1.5;
/// Fade-out window at the end of the toast's life
const FADE_OUT: f64 = 0.3;

pub(crate) struct Toast {
    text: String,
    shown_at: f64,
}

impl Toast {
    pub(crate) fn new(text: String, shown_at: f64) -> Self {
        Self { text, shown_at }
    }

    pub(crate) fn expired(&self, now: f64) -> bool {
        now - self.shown_at >= TOAST_DURATION
    }

    fn opacity(&self, now: f64) -> f32 {
        let remaining = TOAST_DURATION - (now - self.shown_at);
        ((remaining / FADE_OUT).clamp(0.0, 1.0)) as f32
    }
}

impl FxApp {
    pub(crate) fn draw_toast(&self, ctx: &egui::Context, now: f64) {
        let Some(toast) = &self.toast else {
            return;
        };
        let opacity = toast.opacity(now);

        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -32.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(colors::BG_ELEVATED.gamma_multiply(opacity))
                    .stroke(egui::Stroke::new(1.0, colors::ROSE.gamma_multiply(opacity * 0.6)))
                    .corner_radius(18.0)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&toast.text)
                                .size(15.0)
                                .color(colors::TEXT_PRIMARY.gamma_multiply(opacity)),
                        );
                    });
            });
    }
}
