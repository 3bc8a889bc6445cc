//! Player service for business logic.
//!
//! This module provides the `PlayerService` for creating players, registering them on
//! servers and looking them up.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{player::PlayerRepository, player_server::PlayerServerRepository},
    error::AppError,
    model::player::{CreatePlayerParam, Player, RegisterPlayerParam},
};

/// Service providing business logic for player profiles and server memberships.
pub struct PlayerService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    /// Creates a new PlayerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new player profile.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(AppError::RepositoryErr(DuplicateKey))` - Id already taken
    pub async fn create(&self, param: CreatePlayerParam) -> Result<Player, AppError> {
        let player = PlayerRepository::new(self.db).create(param).await?;

        tracing::info!("Created player {}: {}", player.id, player.summary());

        Ok(player)
    }

    /// Registers a player on a server.
    ///
    /// When the parameters carry a profile, the player is created if absent in the same
    /// transaction as the registration.
    ///
    /// # Returns
    /// - `Ok(())` - Player registered
    /// - `Err(AppError::RepositoryErr(DuplicateKey))` - Already registered on this server
    /// - `Err(AppError::RepositoryErr(NotFound))` - Unknown player and no profile given
    pub async fn register(&self, param: RegisterPlayerParam) -> Result<(), AppError> {
        let repo = PlayerServerRepository::new(self.db);

        match param.profile {
            Some(profile) => repo.register_with_profile(profile, &param.server).await?,
            None => repo.register(&param.player_id, &param.server).await?,
        }

        tracing::info!("Registered player {} on {}", param.player_id, param.server);

        Ok(())
    }

    /// Lists the players registered on a server.
    pub async fn list_by_server(&self, server: &str) -> Result<Vec<Player>, AppError> {
        let players = PlayerRepository::new(self.db).list_by_server(server).await?;
        Ok(players)
    }

    /// Gets a player with its servers.
    ///
    /// A lookup whose membership query failed is reported as the membership error; the
    /// partially read player is dropped here.
    ///
    /// # Returns
    /// - `Ok(Player)` - Player with `servers` populated
    /// - `Err(AppError::RepositoryErr(NotFound))` - No player with that id
    /// - `Err(AppError::RepositoryErr(Unavailable))` - Player or membership read failed
    pub async fn get(&self, id: &str) -> Result<Player, AppError> {
        let lookup = PlayerRepository::new(self.db).find_with_servers(id).await?;
        let player = lookup.into_result()?;
        Ok(player)
    }
}
