//! Player data repository for database operations.
//!
//! This module provides the `PlayerRepository` for creating player profiles and reading
//! them back, either bare or expanded with their server memberships.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use crate::server::{
    data::{player_server::fetch_servers, transaction},
    error::repository::RepositoryError,
    model::player::{CreatePlayerParam, Player, PlayerLookup},
};

/// Repository providing database operations for player profiles.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlayerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new player.
    ///
    /// There is no update-on-conflict: an existing id is reported as a duplicate and the
    /// stored row is left untouched.
    ///
    /// # Arguments
    /// - `param` - Profile of the player to create
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player, without servers
    /// - `Err(RepositoryError::DuplicateKey)` - A player with this id already exists
    /// - `Err(RepositoryError::Unavailable)` - Any other storage failure
    pub async fn create(&self, param: CreatePlayerParam) -> Result<Player, RepositoryError> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Player::insert(active_model(param))
            .exec_with_returning(&txn)
            .await;

        let entity = transaction::finish(txn, result).await?;

        Ok(Player::from_entity(entity))
    }

    /// Lists every player registered on `server`, ordered by username.
    ///
    /// Results are bare players: `servers` is left out since every row is already
    /// filtered to the one server.
    ///
    /// # Arguments
    /// - `server` - Server name
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Matching players (empty when nobody is registered there)
    /// - `Err(RepositoryError::Unavailable)` - Storage failure
    pub async fn list_by_server(&self, server: &str) -> Result<Vec<Player>, RepositoryError> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Player::find()
            .join(
                JoinType::InnerJoin,
                entity::player::Relation::PlayerServer.def(),
            )
            .filter(entity::player_server::Column::Server.eq(server))
            .order_by_asc(entity::player::Column::Username)
            .all(&txn)
            .await;

        let entities = transaction::finish(txn, result).await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Finds a bare player by id.
    ///
    /// # Arguments
    /// - `id` - Player id
    ///
    /// # Returns
    /// - `Ok(Player)` - Player found, `servers` is `None`
    /// - `Err(RepositoryError::NotFound)` - No player with that id
    /// - `Err(RepositoryError::Unavailable)` - Storage failure
    pub async fn find_by_id(&self, id: &str) -> Result<Player, RepositoryError> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Player::find_by_id(id)
            .one(&txn)
            .await
            .and_then(|entity| entity.ok_or_else(|| not_found(id)));

        let entity = transaction::finish(txn, result).await?;

        Ok(Player::from_entity(entity))
    }

    /// Finds a player by id and expands its server memberships.
    ///
    /// The player row and the memberships are read in the same transaction. When the
    /// membership query fails after the player was found, the bare player is returned
    /// inside `PlayerLookup::Partial` along with the classified error.
    ///
    /// # Arguments
    /// - `id` - Player id
    ///
    /// # Returns
    /// - `Ok(PlayerLookup::Complete)` - Player with `servers` populated
    /// - `Ok(PlayerLookup::Partial)` - Player found, memberships could not be read
    /// - `Err(RepositoryError::NotFound)` - No player with that id
    /// - `Err(RepositoryError::Unavailable)` - Storage failure reading the player row
    pub async fn find_with_servers(&self, id: &str) -> Result<PlayerLookup, RepositoryError> {
        let txn = self.db.begin().await?;

        let entity = match entity::prelude::Player::find_by_id(id).one(&txn).await {
            Ok(Some(entity)) => entity,
            Ok(None) => return Err(transaction::rollback(txn, not_found(id)).await),
            Err(err) => return Err(transaction::rollback(txn, err).await),
        };
        let player = Player::from_entity(entity);

        match fetch_servers(&txn, id).await {
            Ok(servers) => {
                transaction::commit(txn, PlayerLookup::Complete(player.with_servers(servers)))
                    .await
            }
            Err(err) => {
                let error = transaction::rollback(txn, err).await;
                tracing::warn!("Loaded player {} without servers: {}", id, error);

                Ok(PlayerLookup::Partial { player, error })
            }
        }
    }
}

/// Inserts a player on an already-open transaction unless its id is taken.
///
/// An existing row is left untouched. The conflict is resolved by the insert itself, so
/// concurrent callers racing on the same id all succeed.
pub(super) async fn insert_if_absent<C: ConnectionTrait>(
    conn: &C,
    param: CreatePlayerParam,
) -> Result<(), DbErr> {
    let result = entity::prelude::Player::insert(active_model(param))
        .on_conflict(
            OnConflict::column(entity::player::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await;

    match result {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(err) => Err(err),
    }
}

fn active_model(param: CreatePlayerParam) -> entity::player::ActiveModel {
    entity::player::ActiveModel {
        id: ActiveValue::Set(param.id),
        username: ActiveValue::Set(param.username),
        ign: ActiveValue::Set(param.ign),
        friend_code: ActiveValue::Set(param.friend_code),
        egg_ultra: ActiveValue::Set(param.egg_ultra),
    }
}

fn not_found(id: &str) -> DbErr {
    DbErr::RecordNotFound(format!("player {}", id))
}
