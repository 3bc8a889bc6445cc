//! SeaORM entity models for the player registry tables.

pub mod prelude;

pub mod friendship;
pub mod player;
pub mod player_server;
