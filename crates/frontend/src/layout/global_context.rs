use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

/// App-wide navigation state: the active page path plus sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Path of the active page, e.g. "/dashboard/cars"
    pub active: RwSignal<String>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new("/dashboard".to_string()),
            sidebar_open: RwSignal::new(true),
        }
    }

    /// Restore the active page from the `?active=` query parameter and keep
    /// the URL in sync when the page changes.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: std::collections::HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_path) = params.get("active") {
            self.navigate(active_path);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_path = this.active.get();
            let query_string = serde_qs::to_string(&std::collections::HashMap::from([(
                "active".to_string(),
                active_path,
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            // Untracked read to avoid a reactive dependency on the URL itself
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, path: &str) {
        leptos::logging::log!("navigate: path='{}'", path);
        self.active.set(path.to_string());
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}
