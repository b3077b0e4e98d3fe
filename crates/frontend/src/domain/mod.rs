pub mod attributes;
pub mod availability;
pub mod bookings;
pub mod cars;
pub mod office;
pub mod price_tiers;
