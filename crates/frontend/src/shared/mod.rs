pub mod api_utils;
pub mod cache;
pub mod components;
pub mod config;
pub mod i18n;
pub mod icons;
pub mod inventory_gate;
pub mod list_utils;
pub mod session;
