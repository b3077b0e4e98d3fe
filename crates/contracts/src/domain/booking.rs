//! Incoming bookings and the actions the office can take on them

use crate::domain::phone::mask_phone_number;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
    Completed,
}

/// Actions the office can perform on a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Accept,
    Reject,
    Cancel,
}

impl BookingStatus {
    /// Accept/reject only from Pending; cancel while the booking has not
    /// started (Pending or Accepted).
    pub fn allows(&self, action: BookingAction) -> bool {
        match action {
            BookingAction::Accept | BookingAction::Reject => *self == BookingStatus::Pending,
            BookingAction::Cancel => {
                matches!(self, BookingStatus::Pending | BookingStatus::Accepted)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    #[serde(rename = "carId")]
    pub car_id: i64,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerPhone")]
    pub customer_phone: String,
    #[serde(rename = "dateFrom")]
    pub date_from: NaiveDate,
    #[serde(rename = "dateTo")]
    pub date_to: NaiveDate,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    pub status: BookingStatus,
}

impl Booking {
    /// Customer phone with the last four digits hidden, for listing rows.
    pub fn masked_phone(&self) -> String {
        mask_phone_number(&self.customer_phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(BookingStatus::Pending.allows(BookingAction::Accept));
        assert!(BookingStatus::Pending.allows(BookingAction::Reject));
        assert!(BookingStatus::Pending.allows(BookingAction::Cancel));
        assert!(BookingStatus::Accepted.allows(BookingAction::Cancel));

        assert!(!BookingStatus::Accepted.allows(BookingAction::Accept));
        assert!(!BookingStatus::Rejected.allows(BookingAction::Cancel));
        assert!(!BookingStatus::Completed.allows(BookingAction::Cancel));
        assert!(!BookingStatus::Cancelled.allows(BookingAction::Accept));
    }
}
