//! Keyed TTL cache with an injected clock
//!
//! Used by the attribute store to hold the fetched taxonomy for an hour.
//! The clock is a plain `fn() -> f64` (milliseconds) so expiry is testable
//! without waiting on real time.

use std::collections::HashMap;

pub const HOUR_MS: f64 = 60.0 * 60.0 * 1000.0;

struct Entry<T> {
    value: T,
    stored_at: f64,
}

pub struct TtlCache<T: Clone> {
    ttl_ms: f64,
    now: fn() -> f64,
    entries: HashMap<String, Entry<T>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl_ms: f64, now: fn() -> f64) -> Self {
        Self {
            ttl_ms,
            now,
            entries: HashMap::new(),
        }
    }

    /// Value for `key`, or None if absent or older than the TTL.
    /// Expired entries are dropped on access.
    pub fn get(&mut self, key: &str) -> Option<T> {
        let now = (self.now)();
        match self.entries.get(key) {
            Some(entry) if now - entry.stored_at < self.ttl_ms => Some(entry.value.clone()),
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&mut self, key: &str, value: T) {
        let stored_at = (self.now)();
        self.entries.insert(key.to_string(), Entry { value, stored_at });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Wall clock in milliseconds for the browser environment
pub fn js_now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static FAKE_NOW: Cell<f64> = const { Cell::new(0.0) };
    }

    fn fake_now() -> f64 {
        FAKE_NOW.with(|now| now.get())
    }

    fn advance(ms: f64) {
        FAKE_NOW.with(|now| now.set(now.get() + ms));
    }

    #[test]
    fn test_hit_within_ttl() {
        FAKE_NOW.with(|now| now.set(0.0));
        let mut cache = TtlCache::new(1000.0, fake_now);
        cache.put("k", 42);

        advance(999.0);
        assert_eq!(cache.get("k"), Some(42));
    }

    #[test]
    fn test_expiry_after_ttl() {
        FAKE_NOW.with(|now| now.set(0.0));
        let mut cache = TtlCache::new(1000.0, fake_now);
        cache.put("k", 42);

        advance(1000.0);
        assert_eq!(cache.get("k"), None);
        // and the entry is gone, not just hidden
        advance(-500.0);
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_put_refreshes_age() {
        FAKE_NOW.with(|now| now.set(0.0));
        let mut cache = TtlCache::new(1000.0, fake_now);
        cache.put("k", 1);
        advance(800.0);
        cache.put("k", 2);
        advance(800.0);
        assert_eq!(cache.get("k"), Some(2));
    }

    #[test]
    fn test_missing_key() {
        let mut cache: TtlCache<i32> = TtlCache::new(1000.0, fake_now);
        assert_eq!(cache.get("missing"), None);
    }
}
