//! Top header: sidebar toggle, office title, language switcher, logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::system::auth::context;
use contracts::domain::attribute::Language;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let i18n = use_i18n();

    let other_lang = move || match i18n.lang.get() {
        Language::En => Language::Ar,
        Language::Ar => Language::En,
    };

    // The switcher shows the language it switches TO
    let switch_label = move || match other_lang() {
        Language::Ar => "العربية",
        Language::En => "English",
    };

    let (auth_state, set_auth_state) = context::use_auth();
    let session = crate::shared::session::use_session();

    let logout = move |_| {
        let session = session.clone();
        spawn_local(async move {
            context::do_logout(&session, set_auth_state).await;
        });
    };

    view! {
        <header class="top-header">
            <button class="top-header__toggle" on:click=move |_| ctx.toggle_sidebar()>
                {icon("menu")}
            </button>
            <h1 class="top-header__title">{move || i18n.t("app.title")}</h1>
            <div class="top-header__actions">
                <button
                    class="button button--ghost"
                    on:click=move |_| i18n.lang.set(other_lang())
                >
                    {icon("globe")}
                    {switch_label}
                </button>
                <Show when=move || auth_state.get().token.is_some()>
                    <button class="button button--ghost" on:click=logout.clone()>
                        {icon("logout")}
                        {move || i18n.t("auth.logout")}
                    </button>
                </Show>
            </div>
        </header>
    }
}
