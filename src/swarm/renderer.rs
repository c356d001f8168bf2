//! CPU painting for the swarm
//!
//! Hearts are rotated serif glyphs over a soft rose glow disc; sparks are
//! white discs inside a wide low-alpha halo. Layered translucent shapes stand
//! in for the canvas shadow blur of a browser renderer.

use egui::epaint::TextShape;
use egui::{Color32, FontFamily, FontId, Painter};

use super::data::{Particle, ParticleKind, Swarm};
use crate::theme::colors;

pub fn paint(painter: &Painter, swarm: &Swarm) {
    for p in swarm.iter() {
        let alpha = p.alpha();
        if alpha <= 0.0 {
            continue;
        }
        match p.kind {
            ParticleKind::Heart => draw_heart(painter, p, alpha),
            ParticleKind::Spark => draw_spark(painter, p, alpha),
        }
    }
}

fn faded(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

fn draw_heart(painter: &Painter, p: &Particle, alpha: f32) {
    // glow disc behind the glyph
    painter.circle_filled(p.pos, p.size * 0.9, faded(colors::ROSE, alpha * 0.35));

    let font = FontId::new(p.size, FontFamily::Proportional);
    let fringe = painter.layout_no_wrap(
        "♥".to_owned(),
        font.clone(),
        faded(colors::VIOLET, alpha * 0.9),
    );
    let glyph = painter.layout_no_wrap("♥".to_owned(), font, faded(colors::ROSE, alpha));

    let anchor = p.pos - glyph.size() * 0.5;
    // violet fringe offset a pixel gives the rose→violet tint of the original art
    painter.add(
        TextShape::new(
            anchor + egui::vec2(1.0, 1.0),
            fringe,
            faded(colors::VIOLET, alpha * 0.9),
        )
        .with_angle(p.rot),
    );
    painter.add(TextShape::new(anchor, glyph, faded(colors::ROSE, alpha)).with_angle(p.rot));
}

fn draw_spark(painter: &Painter, p: &Particle, alpha: f32) {
    painter.circle_filled(p.pos, p.size * 3.5, faded(colors::SPARK, alpha * 0.25));
    painter.circle_filled(p.pos, p.size, faded(colors::SPARK, alpha * 0.9));
}
