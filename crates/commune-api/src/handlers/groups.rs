//! Group handlers
//!
//! Endpoints for browsing and managing groups.

use axum::{
    extract::{Path, State},
    Json,
};
use commune_service::{
    CreateGroupRequest, GroupDetailResponse, GroupResponse, GroupService, PopularGroupResponse,
    PopularGroupsQuery, UpdateGroupRequest,
};

use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the most popular groups by post count
///
/// GET /groups/popular?limit=N
pub async fn popular_groups(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PopularGroupsQuery>,
) -> ApiResult<Json<Vec<PopularGroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.popular_groups(query.limit).await?;
    Ok(Json(response))
}

/// Get a group by name with its author and posts
///
/// GET /groups/{name}
///
/// An unknown name yields 200 with a JSON `null` body rather than an error.
pub async fn get_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Option<GroupDetailResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.get_group(&name).await?;
    Ok(Json(response))
}

/// Create a new group
///
/// POST /groups
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGroupRequest>,
) -> ApiResult<Created<Json<GroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.create_group(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a group's description and rules
///
/// PATCH /groups/{name}
pub async fn update_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGroupRequest>,
) -> ApiResult<NoContent> {
    let _ = auth; // any authenticated user may edit
    let service = GroupService::new(state.service_context());
    service.update_group(&name, request).await?;
    Ok(NoContent)
}
