//! Player server membership repository.
//!
//! Provides the `PlayerServerRepository` for registering players on game servers, plus
//! the membership read used when expanding a player.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::{player::insert_if_absent, transaction},
    error::repository::RepositoryError,
    model::player::CreatePlayerParam,
};

/// Repository for the player to server membership relation.
pub struct PlayerServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerServerRepository<'a> {
    /// Creates a new PlayerServerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a player on a server.
    ///
    /// The membership table's composite key rejects a second registration of the same
    /// player on the same server, and its foreign key rejects unknown players.
    ///
    /// # Arguments
    /// - `player_id` - Id of an existing player
    /// - `server` - Server name
    ///
    /// # Returns
    /// - `Ok(())` - Membership created
    /// - `Err(RepositoryError::DuplicateKey)` - Player already registered on this server
    /// - `Err(RepositoryError::NotFound)` - No player with that id
    /// - `Err(RepositoryError::Unavailable)` - Any other storage failure
    pub async fn register(&self, player_id: &str, server: &str) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        let result = insert_membership(&txn, player_id, server).await;

        transaction::finish(txn, result).await
    }

    /// Creates the player when absent, then registers it on a server.
    ///
    /// Both inserts share one transaction: a failed registration leaves no new player
    /// behind, and an existing player keeps its stored profile.
    ///
    /// # Arguments
    /// - `profile` - Profile used when no player with `profile.id` exists
    /// - `server` - Server name
    ///
    /// # Returns
    /// - `Ok(())` - Membership created
    /// - `Err(RepositoryError::DuplicateKey)` - Player already registered on this server
    /// - `Err(RepositoryError::Unavailable)` - Any other storage failure
    pub async fn register_with_profile(
        &self,
        profile: CreatePlayerParam,
        server: &str,
    ) -> Result<(), RepositoryError> {
        let player_id = profile.id.clone();
        let txn = self.db.begin().await?;

        let result = async {
            insert_if_absent(&txn, profile).await?;
            insert_membership(&txn, &player_id, server).await
        }
        .await;

        transaction::finish(txn, result).await
    }
}

async fn insert_membership<C: ConnectionTrait>(
    conn: &C,
    player_id: &str,
    server: &str,
) -> Result<(), DbErr> {
    entity::prelude::PlayerServer::insert(entity::player_server::ActiveModel {
        player_id: ActiveValue::Set(player_id.to_string()),
        server: ActiveValue::Set(server.to_string()),
    })
    .exec_without_returning(conn)
    .await?;

    Ok(())
}

/// Reads a player's server names on an already-open connection or transaction.
pub(super) async fn fetch_servers<C: ConnectionTrait>(
    conn: &C,
    player_id: &str,
) -> Result<Vec<String>, DbErr> {
    let memberships = entity::prelude::PlayerServer::find()
        .filter(entity::player_server::Column::PlayerId.eq(player_id))
        .order_by_asc(entity::player_server::Column::Server)
        .all(conn)
        .await?;

    Ok(memberships.into_iter().map(|m| m.server).collect())
}
