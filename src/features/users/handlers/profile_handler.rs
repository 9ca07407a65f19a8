use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::ProfileResponseDto;
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// Get the caller's profile, including subscription tier
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Caller profile", body = ApiResponse<ProfileResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let profile = service.get_by_id(user.id).await?;
    Ok(Json(ApiResponse::success(Some(profile.into()), None, None)))
}
