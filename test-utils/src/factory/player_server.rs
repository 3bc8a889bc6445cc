//! Factory for player server membership rows.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Registers an existing player on a server.
///
/// # Arguments
/// - `db` - Database connection
/// - `player_id` - Id of a player that must already exist
/// - `server` - Server name
///
/// # Returns
/// - `Ok(entity::player_server::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert (duplicate or unknown player)
pub async fn register_player(
    db: &DatabaseConnection,
    player_id: &str,
    server: &str,
) -> Result<entity::player_server::Model, DbErr> {
    entity::prelude::PlayerServer::insert(entity::player_server::ActiveModel {
        player_id: ActiveValue::Set(player_id.to_string()),
        server: ActiveValue::Set(server.to_string()),
    })
    .exec_with_returning(db)
    .await
}
