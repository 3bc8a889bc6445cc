use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{friend::AddFriendDto, player::PlayerDto},
    server::{
        controller::param::{require_all, required, IdParam},
        error::AppError,
        service::friend::FriendService,
        state::AppState,
    },
};

/// POST /friend - Add a friendship between two players
///
/// # Returns
/// - `201 Created`: JSON FriendshipDto of the stored canonical edge
/// - `400 Bad Request`: `user` or `friend` missing
/// - `409 Conflict`: The players are already friends
/// - `500 Internal Server Error`: Storage error
pub async fn add_friend(
    State(state): State<AppState>,
    Json(payload): Json<AddFriendDto>,
) -> Result<impl IntoResponse, AppError> {
    require_all(&[("user", &payload.user), ("friend", &payload.friend)])?;

    let pair = FriendService::new(&state.db)
        .add(&payload.user, &payload.friend)
        .await?;

    Ok((StatusCode::CREATED, Json(pair.into_dto())))
}

/// GET /friend?id= - List a player's friends
///
/// # Returns
/// - `200 OK`: JSON array of PlayerDto (empty if none or unknown id)
/// - `400 Bad Request`: `id` missing
/// - `500 Internal Server Error`: Storage error
pub async fn list_friends(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> Result<impl IntoResponse, AppError> {
    let id = required(params.id, "id")?;

    let friends = FriendService::new(&state.db).list(&id).await?;

    let friends_dto: Vec<PlayerDto> = friends.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(friends_dto)))
}
