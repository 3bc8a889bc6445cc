use crate::server::{
    data::player::PlayerRepository,
    error::repository::RepositoryError,
    model::player::{CreatePlayerParam, Player, PlayerLookup},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_with_servers;
mod list_by_server;

fn ash() -> CreatePlayerParam {
    CreatePlayerParam {
        id: "u1".to_string(),
        username: "Ash".to_string(),
        ign: "AshK".to_string(),
        friend_code: "111122223333".to_string(),
        egg_ultra: None,
    }
}
