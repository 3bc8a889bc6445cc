use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::player::{CreatePlayerDto, PlayerDto, RegisterPlayerDto},
    server::{
        controller::param::{require_all, required, IdParam, ServerParam},
        error::AppError,
        model::player::{CreatePlayerParam, RegisterPlayerParam},
        service::player::PlayerService,
        state::AppState,
    },
};

/// POST /player - Create a player profile
///
/// # Returns
/// - `201 Created`: JSON PlayerDto of the new player
/// - `400 Bad Request`: A required field is missing or empty
/// - `409 Conflict`: A player with this id already exists
/// - `500 Internal Server Error`: Storage error
pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    require_all(&[
        ("id", &payload.id),
        ("username", &payload.username),
        ("ign", &payload.ign),
        ("friendcode", &payload.friend_code),
    ])?;

    let player = PlayerService::new(&state.db)
        .create(CreatePlayerParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

/// POST /register - Register a player on a server
///
/// The body may carry the full profile (`username`, `ign`, `friendcode`); the player is
/// then created when it does not exist yet.
///
/// # Returns
/// - `201 Created`: Player registered
/// - `400 Bad Request`: `id` or `server` missing, or a partial profile
/// - `404 Not Found`: Unknown player and no profile given
/// - `409 Conflict`: Player already registered on this server
/// - `500 Internal Server Error`: Storage error
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    require_all(&[("id", &payload.id), ("server", &payload.server)])?;

    let param = RegisterPlayerParam::try_from(payload)?;
    PlayerService::new(&state.db).register(param).await?;

    Ok(StatusCode::CREATED)
}

/// GET /player?id= - Get a player with its servers
///
/// # Returns
/// - `200 OK`: JSON PlayerDto including `servers`
/// - `400 Bad Request`: `id` missing
/// - `404 Not Found`: No player with that id
/// - `500 Internal Server Error`: Storage error
pub async fn get_player(
    State(state): State<AppState>,
    Query(params): Query<IdParam>,
) -> Result<impl IntoResponse, AppError> {
    let id = required(params.id, "id")?;

    let player = PlayerService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// GET /player/list?server= - List players registered on a server
///
/// # Returns
/// - `200 OK`: JSON array of PlayerDto without `servers` (empty if none)
/// - `400 Bad Request`: `server` missing
/// - `500 Internal Server Error`: Storage error
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<ServerParam>,
) -> Result<impl IntoResponse, AppError> {
    let server = required(params.server, "server")?;

    let players = PlayerService::new(&state.db)
        .list_by_server(&server)
        .await?;

    let players_dto: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(players_dto)))
}

impl From<CreatePlayerDto> for CreatePlayerParam {
    fn from(dto: CreatePlayerDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            ign: dto.ign,
            friend_code: dto.friend_code,
            egg_ultra: dto.egg_ultra,
        }
    }
}

impl TryFrom<RegisterPlayerDto> for RegisterPlayerParam {
    type Error = AppError;

    /// Builds the registration, attaching a profile only when every profile field is set.
    fn try_from(dto: RegisterPlayerDto) -> Result<Self, Self::Error> {
        let profile = match (dto.username, dto.ign, dto.friend_code) {
            (None, None, None) => None,
            (Some(username), Some(ign), Some(friend_code)) => {
                require_all(&[
                    ("username", &username),
                    ("ign", &ign),
                    ("friendcode", &friend_code),
                ])?;
                Some(CreatePlayerParam {
                    id: dto.id.clone(),
                    username,
                    ign,
                    friend_code,
                    egg_ultra: dto.egg_ultra,
                })
            }
            _ => {
                return Err(AppError::BadRequest(
                    "Profile requires username, ign and friendcode".to_string(),
                ))
            }
        };

        Ok(Self {
            player_id: dto.id,
            server: dto.server,
            profile,
        })
    }
}
