//! GET /api/v1/spas and /api/v1/spas/{id} — listing and detail lookup.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use spaguide_catalog::ResultPage;
use spaguide_core::{
    query::{clean_text, parse_budget, parse_positive},
    QueryParams, SortKey, SpaRecord,
};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta, RuntimeOptions};

/// Raw wire parameters. Everything arrives as an optional string so a
/// malformed token can degrade to the documented default instead of failing
/// extraction with a 400.
#[derive(Debug, Default, Deserialize)]
pub(super) struct SpaListQuery {
    page: Option<String>,
    page_size: Option<String>,
    location: Option<String>,
    treatment: Option<String>,
    budget: Option<String>,
    search: Option<String>,
    sort: Option<String>,
}

impl SpaListQuery {
    fn into_params(self, options: &RuntimeOptions) -> QueryParams {
        QueryParams {
            page: parse_positive(self.page.as_deref(), 1),
            page_size: parse_positive(self.page_size.as_deref(), options.default_page_size)
                .min(options.max_page_size),
            location: clean_text(self.location),
            treatment: clean_text(self.treatment),
            budget: parse_budget(self.budget.as_deref()),
            search: clean_text(self.search),
            sort: self.sort.as_deref().map_or_else(SortKey::default, SortKey::parse),
        }
    }
}

pub(super) async fn list_spas(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SpaListQuery>,
) -> Json<ApiResponse<ResultPage>> {
    let params = query.into_params(&state.options);
    let snapshot = state.store.snapshot();
    let data = spaguide_catalog::query(&snapshot, &params);

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_spa(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SpaRecord>>, ApiError> {
    let snapshot = state.store.snapshot();

    snapshot.by_id(&id).map_or_else(
        || Err(ApiError::new(req_id.0.clone(), "not_found", "spa not found")),
        |spa| {
            Ok(Json(ApiResponse {
                data: spa.clone(),
                meta: ResponseMeta::new(req_id.0.clone()),
            }))
        },
    )
}
