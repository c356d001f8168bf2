//! Hero section: title, the buttons row, press feedback, runaway button

use egui::{vec2, Color32, RichText};
use rand::Rng;
use tracing::debug;

use super::FxApp;
use crate::theme::colors;

/// Expanding press ripple lifetime
pub(crate) const RIPPLE_DURATION: f64 = 0.6;
/// Decorative-button shake lifetime
pub(crate) const SHAKE_DURATION: f64 = 0.45;

const BUTTON_SIZE: egui::Vec2 = vec2(170.0, 46.0);

const SASSY_MESSAGES: &[&str] = &[
    "Impossible… c'est \u{201c}Oui\u{201d} ou \u{201c}Oui\u{201d} 💘",
    "Bien tenté 😄",
    "Ce bouton est décoratif 😇",
    "Nop 😌",
];

/// One press ripple, clipped to the button it was born on.
pub(crate) struct Ripple {
    pub(crate) center: egui::Pos2,
    pub(crate) clip: egui::Rect,
    pub(crate) max_radius: f32,
    pub(crate) started: f64,
}

/// Horizontal shake offset: a few decaying oscillations, zero when idle.
pub(crate) fn shake_offset(started: Option<f64>, now: f64) -> f32 {
    let Some(start) = started else {
        return 0.0;
    };
    let t = ((now - start) / SHAKE_DURATION) as f32;
    if !(0.0..1.0).contains(&t) {
        return 0.0;
    }
    (t * 8.0 * std::f32::consts::TAU).sin() * 6.0 * (1.0 - t)
}

impl FxApp {
    pub(crate) fn render_hero(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.add_space(72.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Tu veux bien ? 💘")
                    .size(44.0)
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new("Une seule bonne réponse possible.")
                    .size(16.0)
                    .color(colors::TEXT_SECONDARY),
            );
        });
        ui.add_space(40.0);

        ui.horizontal(|ui| {
            let row_width = BUTTON_SIZE.x * 3.0 + 24.0;
            ui.add_space(((ui.available_width() - row_width) * 0.5).max(0.0));

            let yes = ui.add(
                egui::Button::new(
                    RichText::new("Oui 💖").size(18.0).color(colors::TEXT_PRIMARY),
                )
                .min_size(BUTTON_SIZE)
                .corner_radius(23.0)
                .fill(colors::ROSE.gamma_multiply(0.85)),
            );
            self.ripple_on_press(ui, &yes, now);
            if yes.clicked() {
                self.show_toast("💖 C'est noté. Évidemment.");
            }

            ui.add_space(12.0);

            // decorative twin of the yes button - shakes instead of doing anything
            let (slot, _) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::hover());
            let shaken = slot.translate(vec2(shake_offset(self.shake_started, now), 0.0));
            let decorative = ui.put(
                shaken,
                egui::Button::new(
                    RichText::new("Oui, évidemment ✨")
                        .size(16.0)
                        .color(colors::TEXT_PRIMARY),
                )
                .min_size(BUTTON_SIZE)
                .corner_radius(23.0)
                .fill(colors::BG_HOVER),
            );
            self.ripple_on_press(ui, &decorative, now);
            if decorative.clicked() {
                self.shake_started = Some(now);
                let pick = self.rng.gen_range(0..SASSY_MESSAGES.len());
                self.show_toast(SASSY_MESSAGES[pick]);
            }

            ui.add_space(12.0);

            // placeholder keeps the flow footprint; the real button lives on the
            // overlay at the evasion controller's position
            let runaway_size = self
                .runaway_id
                .and_then(|id| self.evade.get(id))
                .map_or(BUTTON_SIZE, |t| t.size());
            let (slot, _) = ui.allocate_exact_size(runaway_size, egui::Sense::hover());
            if self.runaway_id.is_none() {
                let viewport = ui.ctx().screen_rect();
                self.runaway_id = Some(self.evade.register(slot, viewport));
            }
        });
    }

    /// Draw the runaway button on the foreground overlay and feed the
    /// evasion controller. Mouse-class pointers only: while touches are
    /// active the button stays put and remains tappable.
    pub(crate) fn render_runaway(&mut self, ctx: &egui::Context, now: f64) {
        let Some(id) = self.runaway_id else {
            return;
        };
        let viewport = ctx.screen_rect();

        let (pointer, touching) = ctx.input(|i| (i.pointer.latest_pos(), i.any_touches()));
        if let Some(p) = pointer {
            if !touching {
                self.evade.repel_from(id, p, viewport);
            }
        }

        let Some(target) = self.evade.get(id) else {
            return;
        };
        let response = egui::Area::new(egui::Id::new("runaway_btn"))
            .order(egui::Order::Foreground)
            .fixed_pos(target.pos())
            .show(ctx, |ui| {
                ui.add(
                    egui::Button::new(
                        RichText::new("Non 🙅").size(16.0).color(colors::TEXT_SECONDARY),
                    )
                    .min_size(BUTTON_SIZE)
                    .corner_radius(23.0)
                    .fill(colors::BG_ELEVATED),
                )
            })
            .inner;

        // measured size feeds the placeholder and the clamp bounds
        self.evade.update_size(id, response.rect.size());

        let pressed = response.is_pointer_button_down_on()
            && ctx.input(|i| i.pointer.any_pressed() && !i.any_touches());
        if pressed {
            if let Some(p) = ctx.input(|i| i.pointer.interact_pos()) {
                self.ripples.push(Ripple {
                    center: p,
                    clip: response.rect,
                    max_radius: response.rect.width().max(response.rect.height()),
                    started: now,
                });
                // an attempted click never lands
                self.evade.relocate_away_from(id, p, viewport);
                debug!("runaway button pressed, relocating");
            }
        }
    }

    /// Record a ripple when a press starts on `response`.
    pub(crate) fn ripple_on_press(&mut self, ui: &egui::Ui, response: &egui::Response, now: f64) {
        let pressed =
            response.is_pointer_button_down_on() && ui.input(|i| i.pointer.any_pressed());
        if !pressed {
            return;
        }
        let center = ui
            .input(|i| i.pointer.interact_pos())
            .unwrap_or_else(|| response.rect.center());
        self.ripples.push(Ripple {
            center,
            clip: response.rect,
            max_radius: response.rect.width().max(response.rect.height()),
            started: now,
        });
    }

    pub(crate) fn draw_ripples(&self, ctx: &egui::Context, now: f64) {
        if self.ripples.is_empty() {
            return;
        }
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("ripple_fx"),
        ));
        for ripple in &self.ripples {
            let t = (((now - ripple.started) / RIPPLE_DURATION).clamp(0.0, 1.0)) as f32;
            let alpha = (0.35 * (1.0 - t) * 255.0) as u8;
            painter.with_clip_rect(ripple.clip).circle_filled(
                ripple.center,
                ripple.max_radius * t,
                Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
            );
        }
    }
}
