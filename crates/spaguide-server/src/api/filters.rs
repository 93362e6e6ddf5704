//! GET /api/v1/filters — distinct filter options for the current snapshot.

use axum::{extract::State, Extension, Json};
use spaguide_catalog::FacetOptions;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

pub(super) async fn get_filters(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<FacetOptions>> {
    let snapshot = state.store.snapshot();
    let data = spaguide_catalog::facets(&snapshot);

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
