use crate::domain::availability::ui::AvailabilityPage;
use crate::domain::bookings::ui::BookingsList;
use crate::domain::cars::ui::list::CarsList;
use crate::domain::office::ui::OfficeConfigsPage;
use crate::domain::price_tiers::ui::list::PriceTiersList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::inventory_gate::InventoryGate;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::overview::OverviewPage;
use leptos::prelude::*;

/// Pages of the dashboard. The key is the URL path, also used by the
/// inventory gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Cars,
    PriceTiers,
    Availability,
    Bookings,
    OfficeConfigs,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Overview,
        Page::Cars,
        Page::PriceTiers,
        Page::Availability,
        Page::Bookings,
        Page::OfficeConfigs,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Overview => "/dashboard",
            Page::Cars => "/dashboard/cars",
            Page::PriceTiers => "/dashboard/price-tiers",
            Page::Availability => "/dashboard/availability",
            Page::Bookings => "/dashboard/bookings",
            Page::OfficeConfigs => "/dashboard/office-configs",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|p| p.path() == path)
    }

    /// i18n key for the sidebar label
    pub fn label_key(&self) -> &'static str {
        match self {
            Page::Overview => "nav.overview",
            Page::Cars => "nav.cars",
            Page::PriceTiers => "nav.price_tiers",
            Page::Availability => "nav.availability",
            Page::Bookings => "nav.bookings",
            Page::OfficeConfigs => "nav.office_configs",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Overview => "dashboard",
            Page::Cars => "car",
            Page::PriceTiers => "tag",
            Page::Availability => "calendar",
            Page::Bookings => "bookings",
            Page::OfficeConfigs => "settings",
        }
    }
}

#[component]
fn PageContent() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    move || {
        let page = Page::from_path(&ctx.active.get()).unwrap_or(Page::Overview);
        match page {
            Page::Overview => view! { <OverviewPage /> }.into_any(),
            Page::Cars => view! { <CarsList /> }.into_any(),
            Page::PriceTiers => view! { <PriceTiersList /> }.into_any(),
            Page::Availability => view! { <AvailabilityPage /> }.into_any(),
            Page::Bookings => view! { <BookingsList /> }.into_any(),
            Page::OfficeConfigs => view! { <OfficeConfigsPage /> }.into_any(),
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <InventoryGate>
            <Shell content=|| view! { <PageContent /> }.into_any() />
        </InventoryGate>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
