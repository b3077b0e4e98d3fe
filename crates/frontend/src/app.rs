use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n::I18n;
use crate::shared::inventory_gate::InventoryStatus;
use crate::shared::session::SessionService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionService::local();

    // Language is restored from the session store; the effect below keeps the
    // document dir/lang attributes and the stored preference in sync.
    let i18n = I18n::new(session.language());
    let lang = i18n.lang;

    provide_context(session.clone());
    provide_context(i18n);
    provide_context(AppGlobalContext::new());
    provide_context(InventoryStatus::new());

    Effect::new(move |_| {
        let lang = lang.get();
        crate::shared::i18n::apply_document_dir(lang);
        session.set_language(lang);
    });

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
