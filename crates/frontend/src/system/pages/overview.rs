//! Dashboard overview: fleet and booking stat cards plus the one-time
//! onboarding banner

use crate::domain::bookings::api as bookings_api;
use crate::shared::components::ui::Button;
use crate::shared::i18n::use_i18n;
use crate::shared::inventory_gate::use_inventory_status;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let i18n = use_i18n();
    let session = crate::shared::session::use_session();
    let inventory = use_inventory_status();

    let (pending_bookings, set_pending_bookings) = signal(0usize);
    let (show_onboarding, set_show_onboarding) = signal(!session.onboarding_seen());

    spawn_local(async move {
        match bookings_api::fetch_pending_total().await {
            Ok(total) => set_pending_bookings.set(total),
            Err(e) => log::error!("pending bookings count failed: {}", e),
        }
    });

    let dismiss_onboarding = move |_| {
        session.set_onboarding_seen();
        set_show_onboarding.set(false);
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{move || i18n.t("overview.title")}</h1>
                </div>
            </div>

            <Show when=move || show_onboarding.get()>
                <div class="onboarding-banner">
                    <h3>{move || i18n.t("overview.welcome")}</h3>
                    <p>{move || i18n.t("overview.welcome_text")}</p>
                    <Button variant="secondary" on_click=Callback::new(dismiss_onboarding.clone())>
                        {move || i18n.t("overview.dismiss")}
                    </Button>
                </div>
            </Show>

            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-card__value">
                        {move || if inventory.is_loading() {
                            i18n.t("common.loading")
                        } else {
                            inventory.total_cars.get().to_string()
                        }}
                    </span>
                    <span class="stat-card__label">{move || i18n.t("overview.total_cars")}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">
                        {move || pending_bookings.get().to_string()}
                    </span>
                    <span class="stat-card__label">
                        {move || i18n.t("overview.pending_bookings")}
                    </span>
                </div>
            </div>
        </div>
    }
}
