//! Decorative behavior layer for the "Oui ou Oui" invitation page
//!
//! Two independent visual subsystems share the page:
//! - a runaway button that evades the mouse pointer ([`evade`])
//! - an ambient heart & spark drift behind the content ([`swarm`])
//!
//! Both are driven by the page's frame callback and disabled or degraded
//! gracefully (reduced motion, missing pointer) rather than ever failing the
//! page.

pub mod app;
pub mod evade;
pub mod motion;
pub mod swarm;
pub mod theme;
pub mod time;
pub mod util;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::FxApp;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Route tracing to the browser console
        tracing_wasm::set_as_global_default();

        let web_options = eframe::WebOptions::default();

        wasm_bindgen_futures::spawn_local(async {
            let canvas = web_sys::window()
                .expect("no window")
                .document()
                .expect("no document")
                .get_element_by_id("canvas")
                .expect("no canvas element")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("not a canvas element");

            eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(|cc| Ok(Box::new(FxApp::new(cc)))),
                )
                .await
                .expect("Failed to start eframe");
        });
    }
}
