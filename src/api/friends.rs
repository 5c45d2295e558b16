use crate::api::RequestContext;
use crate::api::auth::AuthenticatedUser;
use crate::common::error::{AppError, ServiceResponse, ServiceResult};
use crate::common::search;
use crate::common::state::AppState;
use crate::models::relationships::{Friend, FriendArgs, Relationship, RemoveFriendResponse};
use crate::models::users::User;
use crate::usecases::{availability, recommendations, relationships, users};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_friend))
        .route("/remove", delete(remove_friend))
        .route("/{user_id}", get(list_friends))
        .route("/recommendedFriends/{user_id}", get(recommended_friends))
        .route("/available/{user_id}", get(available_friends))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchArgs {
    #[serde(default)]
    pub q: String,
}

fn decode_body(body: Result<Json<FriendArgs>, JsonRejection>) -> ServiceResult<FriendArgs> {
    match body {
        Ok(Json(args)) => Ok(args),
        Err(rejection) => {
            warn!("Rejected friend request body: {rejection}");
            Err(AppError::DecodingRequestFailed)
        }
    }
}

pub async fn add_friend(
    auth: AuthenticatedUser,
    ctx: RequestContext,
    body: Result<Json<FriendArgs>, JsonRejection>,
) -> ServiceResult<(StatusCode, Json<Relationship>)> {
    let args = decode_body(body)?;
    let relationship = relationships::add_friend(&ctx, args.user_id, args.friend_id)
        .await
        .inspect_err(|e| {
            warn!(
                session_id = %auth.session_id,
                session_user_id = auth.user_id,
                user_id = args.user_id,
                friend_id = args.friend_id,
                code = e.code(),
                "Failed to add friend"
            )
        })?;
    Ok((StatusCode::CREATED, Json(relationship)))
}

pub async fn remove_friend(
    auth: AuthenticatedUser,
    ctx: RequestContext,
    body: Result<Json<FriendArgs>, JsonRejection>,
) -> ServiceResponse<RemoveFriendResponse> {
    let args = decode_body(body)?;
    relationships::remove_friend(&ctx, args.user_id, args.friend_id)
        .await
        .inspect_err(|e| {
            warn!(
                session_id = %auth.session_id,
                session_user_id = auth.user_id,
                user_id = args.user_id,
                friend_id = args.friend_id,
                code = e.code(),
                "Failed to remove friend"
            )
        })?;
    Ok(Json(RemoveFriendResponse {
        message: "Friend removed successfully",
    }))
}

/// `GET /friends/{user_id}`. A blank, `null` or non-numeric id is answered
/// with `400 friends.invalid_user_id` rather than the generic `500` older
/// clients were written against; they only check for a non-2xx status.
pub async fn list_friends(
    auth: AuthenticatedUser,
    ctx: RequestContext,
    Path(user_id): Path<String>,
    Query(args): Query<SearchArgs>,
) -> ServiceResponse<Vec<Friend>> {
    let friends = relationships::fetch_friends(&ctx, &user_id)
        .await
        .inspect_err(|e| {
            warn!(
                session_id = %auth.session_id,
                session_user_id = auth.user_id,
                user_id = %user_id,
                code = e.code(),
                "Failed to fetch friends"
            )
        })?;
    Ok(Json(search::filter(friends, &args.q)))
}

pub async fn recommended_friends(
    auth: AuthenticatedUser,
    ctx: RequestContext,
    Path(user_id): Path<String>,
    Query(args): Query<SearchArgs>,
) -> ServiceResponse<Vec<User>> {
    let user_id = users::parse_user_id(&user_id)?;
    let recommendations = recommendations::fetch_recommendations(&ctx, user_id)
        .await
        .inspect_err(|e| {
            warn!(
                session_id = %auth.session_id,
                session_user_id = auth.user_id,
                user_id,
                code = e.code(),
                "Failed to fetch recommended friends"
            )
        })?;
    Ok(Json(search::filter(recommendations, &args.q)))
}

pub async fn available_friends(
    auth: AuthenticatedUser,
    ctx: RequestContext,
    Path(user_id): Path<String>,
    Query(args): Query<SearchArgs>,
) -> ServiceResponse<Vec<User>> {
    let user_id = users::parse_user_id(&user_id)?;
    let available = availability::fetch_available(&ctx, user_id)
        .await
        .inspect_err(|e| {
            warn!(
                session_id = %auth.session_id,
                session_user_id = auth.user_id,
                user_id,
                code = e.code(),
                "Failed to fetch available people"
            )
        })?;
    Ok(Json(search::filter(available, &args.q)))
}
