//! Collapsible programme section with its reveal toggle

use egui::RichText;

use super::FxApp;
use crate::theme::colors;

const PROGRAMME: &[(&str, &str)] = &[
    ("19h00", "Apéro & bulles"),
    ("20h00", "Dîner aux chandelles"),
    ("21h30", "Film sous un plaid"),
    ("22h30", "Surprise 🤫"),
];

impl FxApp {
    pub(crate) fn render_programme(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.vertical_centered(|ui| {
            let label = if self.programme_open {
                "Cacher le programme 🙈"
            } else {
                "Afficher le programme 💝"
            };
            let toggle = ui.add(
                egui::Button::new(RichText::new(label).size(15.0).color(colors::TEXT_PRIMARY))
                    .min_size(egui::vec2(220.0, 40.0))
                    .corner_radius(20.0)
                    .fill(colors::BG_ELEVATED),
            );
            self.ripple_on_press(ui, &toggle, now);
            if toggle.clicked() {
                self.programme_open = !self.programme_open;
                self.scroll_programme = self.programme_open;
            }
        });

        if !self.programme_open {
            return;
        }

        ui.add_space(16.0);
        let section = egui::Frame::new()
            .fill(colors::BG_ELEVATED)
            .stroke(egui::Stroke::new(1.0, colors::BORDER))
            .corner_radius(8.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width().min(420.0));
                ui.label(
                    RichText::new("Programme")
                        .size(22.0)
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(8.0);
                for (hour, item) in PROGRAMME {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(*hour).monospace().color(colors::ROSE));
                        ui.add_space(10.0);
                        ui.label(RichText::new(*item).color(colors::TEXT_SECONDARY));
                    });
                }
            });

        if self.scroll_programme {
            ui.scroll_to_rect(section.response.rect, Some(egui::Align::TOP));
            self.scroll_programme = false;
        }
    }
}
