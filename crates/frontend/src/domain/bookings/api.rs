use contracts::domain::booking::{Booking, BookingAction};
use contracts::shared::pagination::{PageQuery, Paginated};
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::api_utils;

pub async fn fetch_bookings(query: PageQuery) -> Result<Paginated<Booking>, String> {
    api_utils::get_json(&format!("/bookings?{}", query.to_query_string())).await
}

/// Count of bookings still waiting for a decision, shown on the overview.
pub async fn fetch_pending_total() -> Result<usize, String> {
    let query = PageQuery { limit: 1, ..PageQuery::default() };
    let page: Paginated<Booking> = api_utils::get_json(&format!(
        "/bookings?{}&status=pending",
        query.to_query_string()
    ))
    .await?;
    Ok(page.total)
}

/// Apply an office decision to a booking. The backend re-checks the
/// status transition; this is only the request side.
pub async fn booking_action(id: Uuid, action: BookingAction) -> Result<(), String> {
    let verb = match action {
        BookingAction::Accept => "accept",
        BookingAction::Reject => "reject",
        BookingAction::Cancel => "cancel",
    };
    api_utils::post_json_no_response(&format!("/bookings/{}/{}", id, verb), &serde_json::json!({}))
        .await
}

#[derive(Deserialize)]
struct BookingEnabledResponse {
    #[serde(rename = "bookingEnabled")]
    booking_enabled: bool,
}

pub async fn fetch_booking_enabled() -> Result<bool, String> {
    let response: BookingEnabledResponse = api_utils::get_json("/office/booking-enabled").await?;
    Ok(response.booking_enabled)
}

pub async fn set_booking_enabled(enabled: bool) -> Result<(), String> {
    api_utils::put_json(
        "/office/booking-enabled",
        &serde_json::json!({ "bookingEnabled": enabled }),
    )
    .await
}
