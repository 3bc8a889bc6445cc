//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .id("u1")
///     .ign("AshK")
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    username: String,
    ign: String,
    friend_code: String,
    egg_ultra: Option<bool>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - id: `"player_{n}"` where n is auto-incremented
    /// - username: `"User {n}"`
    /// - ign: `"Trainer{n}"`
    /// - friend_code: `n` zero-padded to 12 digits
    /// - egg_ultra: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("player_{}", n),
            username: format!("User {}", n),
            ign: format!("Trainer{}", n),
            friend_code: format!("{:012}", n),
            egg_ultra: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn ign(mut self, ign: impl Into<String>) -> Self {
        self.ign = ign.into();
        self
    }

    pub fn friend_code(mut self, friend_code: impl Into<String>) -> Self {
        self.friend_code = friend_code.into();
        self
    }

    pub fn egg_ultra(mut self, egg_ultra: Option<bool>) -> Self {
        self.egg_ultra = egg_ultra;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::Set(self.id),
            username: ActiveValue::Set(self.username),
            ign: ActiveValue::Set(self.ign),
            friend_code: ActiveValue::Set(self.friend_code),
            egg_ultra: ActiveValue::Set(self.egg_ultra),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player with a specific id.
///
/// Shorthand for `PlayerFactory::new(db).id(id).build().await`.
pub async fn create_player_with_id(
    db: &DatabaseConnection,
    id: impl Into<String>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).id(id).build().await
}
