use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        friend::{add_friend, list_friends},
        player::{create_player, get_player, list_players, register},
    },
    state::AppState,
};

/// Bound on handling a single request, covering body read and response write.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/player", get(get_player).post(create_player))
        .route("/player/list", get(list_players))
        .route("/register", post(register))
        .route("/friend", get(list_friends).post(add_friend))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(TraceLayer::new_for_http())
}
