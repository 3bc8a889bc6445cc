pub use super::friendship::Entity as Friendship;
pub use super::player::Entity as Player;
pub use super::player_server::Entity as PlayerServer;
