pub mod attribute;
pub mod availability;
pub mod booking;
pub mod car;
pub mod office;
pub mod phone;
pub mod price_tier;
