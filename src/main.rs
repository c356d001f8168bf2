//! Native preview window for the invitation page
//!
//! Run with: cargo run --bin ouipage-preview --features native
//! Set REDUCED_MOTION=1 to preview the page without the ambient swarm.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use ouipage::app::FxApp;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ouipage=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Oui ou Oui")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ouipage",
        options,
        Box::new(|cc| Ok(Box::new(FxApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
