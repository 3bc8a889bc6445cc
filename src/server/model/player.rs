//! Player domain models and parameters.
//!
//! Provides the player profile model, its optional server-membership expansion and
//! the parameter types used to create players and register them on servers.

use crate::{
    model::player::PlayerDto,
    server::error::repository::RepositoryError,
};

/// Player profile with an optional expansion of its server memberships.
///
/// `servers` is `None` for a bare player (list results, freshly created players) and
/// `Some` once memberships have been loaded through an explicit expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Caller-supplied unique id (e.g. a platform user id).
    pub id: String,
    /// Display name.
    pub username: String,
    /// In-game name.
    pub ign: String,
    /// Friend code, stored as given.
    pub friend_code: String,
    /// Whether the player has an egg for an ultra league team, when known.
    pub egg_ultra: Option<bool>,
    /// Servers the player is registered on, when expanded.
    pub servers: Option<Vec<String>>,
}

impl Player {
    /// Converts an entity model to a bare player at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Player` - The player with `servers` left unexpanded
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            ign: entity.ign,
            friend_code: entity.friend_code,
            egg_ultra: entity.egg_ultra,
            servers: None,
        }
    }

    /// Attaches the player's server memberships.
    pub fn with_servers(mut self, servers: Vec<String>) -> Self {
        self.servers = Some(servers);
        self
    }

    /// Renders the player as a single display line.
    ///
    /// The egg-for-ultra flag is appended as `yes`/`no` only when it is known.
    ///
    /// # Returns
    /// - `String` - e.g. `**FC**: 111122223333 | **IGN**: AshK | **User**: Ash`
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "**FC**: {} | **IGN**: {} | **User**: {}",
            self.friend_code, self.ign, self.username
        );

        if let Some(egg_ultra) = self.egg_ultra {
            let flag = if egg_ultra { "yes" } else { "no" };
            summary.push_str(&format!(" | **Egg Ultra**: {}", flag));
        }

        summary
    }

    /// Converts the player domain model to a DTO for API responses.
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            username: self.username,
            ign: self.ign,
            friend_code: self.friend_code,
            egg_ultra: self.egg_ultra,
            servers: self.servers,
        }
    }
}

/// Outcome of a player lookup that expands server memberships.
///
/// The lookup succeeds as soon as the player row is found. If loading the memberships
/// afterwards fails, the player read so far is still handed back together with the
/// error, so callers must inspect the variant rather than assume a complete player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerLookup {
    /// Player row and memberships were both read.
    Complete(Player),
    /// Player row was read but the membership query failed.
    Partial {
        /// Bare player, `servers` is `None`.
        player: Player,
        /// Classified failure of the membership query.
        error: RepositoryError,
    },
}

impl PlayerLookup {
    /// Collapses the lookup, treating a partial read as a failure.
    pub fn into_result(self) -> Result<Player, RepositoryError> {
        match self {
            Self::Complete(player) => Ok(player),
            Self::Partial { error, .. } => Err(error),
        }
    }
}

/// Parameters for creating a new player profile.
#[derive(Debug, Clone)]
pub struct CreatePlayerParam {
    pub id: String,
    pub username: String,
    pub ign: String,
    pub friend_code: String,
    pub egg_ultra: Option<bool>,
}

/// Parameters for registering a player on a server.
///
/// `profile` carries the full player profile for callers that register and create in
/// a single request; the player is created first when it does not exist yet.
#[derive(Debug, Clone)]
pub struct RegisterPlayerParam {
    pub player_id: String,
    pub server: String,
    pub profile: Option<CreatePlayerParam>,
}
