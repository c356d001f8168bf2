//! Rose & violet night theme for the invitation page

use egui::Color32;

/// Warm dark palette
/// Deep plum backgrounds, rose/violet accents, soft off-white text
pub mod colors {
    use super::Color32;

    // === Backgrounds (near-black plum) ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(16, 6, 14);         // #10060E
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(28, 12, 24);       // #1C0C18 - cards
    pub const BG_HOVER: Color32 = Color32::from_rgb(44, 20, 38);          // #2C1426 - hover states

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 244, 250);   // #FFF4FA - warm white
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(214, 178, 200); // #D6B2C8
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(122, 92, 112);      // #7A5C70

    // === Accents ===
    pub const ROSE: Color32 = Color32::from_rgb(255, 61, 127);            // #FF3D7F - hearts, glow
    pub const VIOLET: Color32 = Color32::from_rgb(176, 29, 255);          // #B01DFF - heart gradient end
    pub const SPARK: Color32 = Color32::from_rgb(255, 255, 255);          // sparks are pure white

    // === Lines & Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(66, 36, 56);            // #422438
}

/// Create the page's egui Visuals
pub fn page_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.inactive.bg_fill = BG_ELEVATED;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.weak_bg_fill = BG_ELEVATED;

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ROSE);
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;

    visuals.widgets.active.bg_fill = BG_HOVER;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, VIOLET);
    visuals.widgets.active.weak_bg_fill = BG_HOVER;

    // Selection - rose on plum
    visuals.selection.bg_fill = Color32::from_rgb(92, 28, 54);
    visuals.selection.stroke = egui::Stroke::new(1.0, ROSE);

    visuals.hyperlink_color = ROSE;

    // Soft flat look - no drop shadows
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
