pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point. The app is fully client-side rendered; everything
/// hangs off the body mount.
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("starting rental office dashboard");
    leptos::mount::mount_to_body(app::App);
}
