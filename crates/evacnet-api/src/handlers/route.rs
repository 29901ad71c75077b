//! Evacuation route map handler.

use axum::Json;
use axum::extract::{Query, State};

use evacnet_routing::{Coordinate, EvacuationMap};

use crate::dto::request::RouteMapQuery;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /route_map?start=lat,lon&end=lat,lon
pub async fn route_map(
    State(state): State<AppState>,
    Query(query): Query<RouteMapQuery>,
) -> ApiResult<Json<EvacuationMap>> {
    let start = query.start.as_deref().map(str::parse::<Coordinate>).transpose()?;
    let end = query.end.as_deref().map(str::parse::<Coordinate>).transpose()?;

    let map = state.route_service.evacuation_map(start, end).await?;
    Ok(Json(map))
}
