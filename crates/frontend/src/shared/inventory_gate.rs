//! Frontend side of the inventory-empty gate
//!
//! Fetches the car total once (limit=1), feeds it into the
//! `contracts::shared::inventory_gate` state machine and redirects guarded
//! pages to the inventory page while the fleet is empty.

use crate::domain::cars::api as cars_api;
use crate::layout::global_context::AppGlobalContext;
use contracts::shared::inventory_gate::{next_route, InventoryState};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct InventoryStatus {
    pub state: RwSignal<InventoryState>,
    pub total_cars: RwSignal<usize>,
}

impl InventoryStatus {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(InventoryState::Unknown),
            total_cars: RwSignal::new(0),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.get().is_loading()
    }

    pub fn is_empty(&self) -> bool {
        self.state.get().is_empty()
    }

    /// Re-query the car total. Called on startup and after car mutations.
    pub fn refresh(&self) {
        let state = self.state;
        let total_cars = self.total_cars;
        spawn_local(async move {
            match cars_api::fetch_total_cars().await {
                Ok(total) => {
                    total_cars.set(total);
                    state.set(InventoryState::from_total(Some(total)));
                }
                Err(e) => {
                    // A failed count never locks the user out of a page
                    log::error!("inventory count failed: {}", e);
                    state.set(InventoryState::Unknown);
                }
            }
        });
    }
}

pub fn use_inventory_status() -> InventoryStatus {
    use_context::<InventoryStatus>().expect("InventoryStatus not found in component tree")
}

/// Wraps the main layout: watches the gate state and the active page and
/// issues the redirect the state machine asks for.
#[component]
pub fn InventoryGate(children: ChildrenFn) -> impl IntoView {
    let status = use_inventory_status();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    status.refresh();

    Effect::new(move |_| {
        let state = status.state.get();
        let current = ctx.active.get();
        if let Some(target) = next_route(state, &current) {
            ctx.navigate(target);
        }
    });

    children()
}
