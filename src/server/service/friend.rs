//! Friend service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::friendship::FriendshipRepository,
    error::AppError,
    model::{friendship::FriendPair, player::Player},
};

/// Service providing business logic for friendships.
pub struct FriendService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FriendService<'a> {
    /// Creates a new FriendService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a friendship between two players.
    ///
    /// # Returns
    /// - `Ok(FriendPair)` - The stored canonical edge
    /// - `Err(AppError::RepositoryErr(DuplicateKey))` - Already friends
    pub async fn add(&self, user: &str, friend: &str) -> Result<FriendPair, AppError> {
        let pair = FriendshipRepository::new(self.db).add(user, friend).await?;

        tracing::info!("Added friendship {} <-> {}", pair.user(), pair.friend());

        Ok(pair)
    }

    /// Lists a player's friends.
    pub async fn list(&self, player_id: &str) -> Result<Vec<Player>, AppError> {
        let friends = FriendshipRepository::new(self.db)
            .get_friends(player_id)
            .await?;
        Ok(friends)
    }
}
