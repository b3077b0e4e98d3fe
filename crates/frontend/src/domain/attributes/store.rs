//! Cached access to the attribute catalog
//!
//! The taxonomy changes rarely, so it is held in a one-hour TTL cache.
//! Concurrent callers during a refresh share one in-flight request via a
//! `Shared` future instead of each issuing their own network call.

use crate::shared::cache::{js_now_ms, TtlCache, HOUR_MS};
use contracts::domain::attribute::AttributeCatalog;
use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use std::cell::RefCell;

use super::api;

type CatalogResult = Result<AttributeCatalog, String>;
type InFlight = Shared<LocalBoxFuture<'static, CatalogResult>>;

const CATALOG_KEY: &str = "catalog";

thread_local! {
    static CACHE: RefCell<TtlCache<AttributeCatalog>> =
        RefCell::new(TtlCache::new(HOUR_MS, js_now_ms));
    static IN_FLIGHT: RefCell<Option<InFlight>> = const { RefCell::new(None) };
}

/// Catalog from the cache, or from the network on a miss.
pub async fn load_catalog() -> CatalogResult {
    if let Some(catalog) = CACHE.with(|c| c.borrow_mut().get(CATALOG_KEY)) {
        return Ok(catalog);
    }

    let fetch = IN_FLIGHT.with(|slot| {
        let mut slot = slot.borrow_mut();
        match slot.as_ref() {
            Some(existing) => existing.clone(),
            None => {
                let fetch = api::fetch_catalog().boxed_local().shared();
                *slot = Some(fetch.clone());
                fetch
            }
        }
    });

    let result = fetch.await;
    IN_FLIGHT.with(|slot| slot.borrow_mut().take());

    if let Ok(catalog) = &result {
        CACHE.with(|c| c.borrow_mut().put(CATALOG_KEY, catalog.clone()));
    }
    result
}

/// Drop the cached catalog; the next `load_catalog` refetches.
pub fn invalidate() {
    CACHE.with(|c| c.borrow_mut().clear());
}
