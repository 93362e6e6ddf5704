//! POST /api/v1/bookings/notices — compose the confirmation notices for a
//! confirmed booking. Delivery is an external concern; this endpoint renders
//! and reports what would be sent.

use axum::{extract::State, Extension, Json};
use serde::Serialize;
use spaguide_notify::{format_rupiah, BookingRequest, NotifyError, RenderedNotice};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct NoticeSummary {
    recipient: String,
    subject: String,
}

#[derive(Debug, Serialize)]
pub(super) struct BookingNoticesData {
    customer: NoticeSummary,
    spa: NoticeSummary,
    total: String,
}

pub(super) async fn send_booking_notices(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(booking): Json<BookingRequest>,
) -> Result<Json<ApiResponse<BookingNoticesData>>, ApiError> {
    booking
        .validate()
        .map_err(|e| map_notify_error(req_id.0.clone(), &e))?;

    let snapshot = state.store.snapshot();
    let spa_recipient = booking
        .cart_items
        .first()
        .and_then(|item| snapshot.by_id(&item.spa_id))
        .and_then(|spa| spa.email.clone())
        .unwrap_or_else(|| state.options.booking_fallback_email.clone());

    let customer = state
        .composer
        .customer_notice(&booking)
        .map_err(|e| map_notify_error(req_id.0.clone(), &e))?;
    let spa = state
        .composer
        .spa_notice(&booking, &spa_recipient)
        .map_err(|e| map_notify_error(req_id.0.clone(), &e))?;

    tracing::info!(
        customer = %customer.recipient,
        spa = %spa.recipient,
        lines = booking.cart_items.len(),
        "booking notices composed"
    );

    Ok(Json(ApiResponse {
        data: BookingNoticesData {
            customer: summarize(&customer),
            spa: summarize(&spa),
            total: format_rupiah(booking.total()),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn summarize(notice: &RenderedNotice) -> NoticeSummary {
    NoticeSummary {
        recipient: notice.recipient.clone(),
        subject: notice.subject.clone(),
    }
}

fn map_notify_error(request_id: String, error: &NotifyError) -> ApiError {
    match error {
        NotifyError::InvalidBooking(msg) => {
            ApiError::new(request_id, "validation_error", msg.clone())
        }
        NotifyError::Template(_) => {
            tracing::error!(error = %error, "notice rendering failed");
            ApiError::new(
                request_id,
                "internal_error",
                "failed to render booking notices",
            )
        }
    }
}
