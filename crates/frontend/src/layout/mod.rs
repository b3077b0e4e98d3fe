pub mod global_context;
pub mod header;
pub mod sidebar;

use header::Header;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
///
/// The sidebar side flips automatically in RTL via the document `dir`
/// attribute; the layout itself is direction-agnostic.
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Header />

            <div class="app-body">
                // Sidebar reads ctx.sidebar_open for visibility
                <Sidebar />

                <div class="app-main">
                    {content()}
                </div>
            </div>
        </div>
    }
}
