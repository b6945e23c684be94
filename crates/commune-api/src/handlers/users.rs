//! User preference handlers

use axum::{extract::State, Json};
use commune_service::{PreferencesResponse, UpdatePreferencesRequest, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the caller's preferences
///
/// GET /users/@me/preferences
pub async fn get_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<PreferencesResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_preferences(auth.user_id).await?;
    Ok(Json(response))
}

/// Set the caller's theme preference
///
/// PATCH /users/@me/preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdatePreferencesRequest>,
) -> ApiResult<Json<PreferencesResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.set_theme(auth.user_id, request.theme).await?;
    Ok(Json(response))
}
