//! Session and preferences storage
//!
//! The auth token, the onboarding flag and the language preference live
//! behind the `SessionStore` trait so tests can substitute an in-memory
//! fake for `localStorage`.

use contracts::domain::attribute::Language;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const AUTH_TOKEN_KEY: &str = "auth_token";
const ONBOARDING_SEEN_KEY: &str = "onboarding_seen";
const LANGUAGE_KEY: &str = "lang";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

// ============================================================================
// Stores
// ============================================================================

/// Browser `localStorage` store
pub struct LocalStorageStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory fake for tests
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

// ============================================================================
// Typed service
// ============================================================================

/// Typed accessors over a `SessionStore`. Cloning is cheap; the store is
/// shared.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore + Send + Sync>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Service backed by browser `localStorage`
    pub fn local() -> Self {
        Self::new(Arc::new(LocalStorageStore))
    }

    pub fn auth_token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    pub fn set_auth_token(&self, token: &str) {
        self.store.set(AUTH_TOKEN_KEY, token);
    }

    pub fn clear_auth_token(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
    }

    pub fn onboarding_seen(&self) -> bool {
        self.store.get(ONBOARDING_SEEN_KEY).as_deref() == Some("true")
    }

    pub fn set_onboarding_seen(&self) {
        self.store.set(ONBOARDING_SEEN_KEY, "true");
    }

    pub fn language(&self) -> Language {
        match self.store.get(LANGUAGE_KEY).as_deref() {
            Some("ar") => Language::Ar,
            _ => Language::En,
        }
    }

    pub fn set_language(&self, lang: Language) {
        self.store.set(LANGUAGE_KEY, lang.code());
    }
}

/// Hook to access the session service provided in `App`
pub fn use_session() -> SessionService {
    leptos::prelude::use_context::<SessionService>()
        .expect("SessionService not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_service() -> SessionService {
        SessionService::new(Arc::new(MemoryStore::default()))
    }

    #[test]
    fn test_auth_token_roundtrip() {
        let session = memory_service();
        assert_eq!(session.auth_token(), None);

        session.set_auth_token("abc123");
        assert_eq!(session.auth_token().as_deref(), Some("abc123"));

        session.clear_auth_token();
        assert_eq!(session.auth_token(), None);
    }

    #[test]
    fn test_onboarding_flag() {
        let session = memory_service();
        assert!(!session.onboarding_seen());
        session.set_onboarding_seen();
        assert!(session.onboarding_seen());
    }

    #[test]
    fn test_language_defaults_to_english() {
        let session = memory_service();
        assert_eq!(session.language(), Language::En);
        session.set_language(Language::Ar);
        assert_eq!(session.language(), Language::Ar);
    }
}
