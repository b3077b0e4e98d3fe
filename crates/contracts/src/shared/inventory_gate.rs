//! Inventory-empty gate
//!
//! Pages like the dashboard overview and office configs assume at least one
//! car exists. The gate is a small explicit state machine: the car total is
//! fetched once (limit=1, only the total matters) and a pure function
//! decides whether the current path must redirect to the inventory page.

/// What we know about the fleet size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryState {
    /// Count not fetched yet (or the fetch failed)
    Unknown,
    Empty,
    NonEmpty,
}

impl InventoryState {
    pub fn from_total(total: Option<usize>) -> Self {
        match total {
            None => InventoryState::Unknown,
            Some(0) => InventoryState::Empty,
            Some(_) => InventoryState::NonEmpty,
        }
    }

    /// The count has not resolved yet
    pub fn is_loading(&self) -> bool {
        *self == InventoryState::Unknown
    }

    pub fn is_empty(&self) -> bool {
        *self == InventoryState::Empty
    }
}

/// The inventory page itself; never redirected
pub const CARS_PATH: &str = "/dashboard/cars";

/// Paths that assume a non-empty fleet
pub const GUARDED_PATHS: &[&str] = &["/dashboard", "/dashboard/office-configs"];

/// Decide where to send the user, if anywhere.
///
/// Only a resolved-empty inventory triggers a redirect, and only on guarded
/// paths. `Unknown` never redirects: while the count is loading the caller
/// shows its loading state instead of bouncing the user around.
pub fn next_route(state: InventoryState, current_path: &str) -> Option<&'static str> {
    if state != InventoryState::Empty {
        return None;
    }
    if current_path == CARS_PATH {
        return None;
    }
    GUARDED_PATHS
        .iter()
        .find(|p| **p == current_path)
        .map(|_| CARS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_total() {
        assert_eq!(InventoryState::from_total(None), InventoryState::Unknown);
        assert_eq!(InventoryState::from_total(Some(0)), InventoryState::Empty);
        assert_eq!(InventoryState::from_total(Some(7)), InventoryState::NonEmpty);
    }

    #[test]
    fn test_state_predicates() {
        assert!(InventoryState::Unknown.is_loading());
        assert!(!InventoryState::Unknown.is_empty());
        assert!(InventoryState::Empty.is_empty());
        assert!(!InventoryState::Empty.is_loading());
        assert!(!InventoryState::NonEmpty.is_empty());
        assert!(!InventoryState::NonEmpty.is_loading());
    }

    #[test]
    fn test_empty_inventory_redirects_guarded_paths() {
        assert_eq!(
            next_route(InventoryState::Empty, "/dashboard"),
            Some(CARS_PATH)
        );
        assert_eq!(
            next_route(InventoryState::Empty, "/dashboard/office-configs"),
            Some(CARS_PATH)
        );
    }

    #[test]
    fn test_no_redirect_when_loading_or_non_empty() {
        assert_eq!(next_route(InventoryState::Unknown, "/dashboard"), None);
        assert_eq!(next_route(InventoryState::NonEmpty, "/dashboard"), None);
    }

    #[test]
    fn test_cars_page_never_redirects() {
        assert_eq!(next_route(InventoryState::Empty, CARS_PATH), None);
    }

    #[test]
    fn test_unguarded_paths_pass_through() {
        assert_eq!(next_route(InventoryState::Empty, "/dashboard/bookings"), None);
    }
}
