use crate::server::{
    data::{player::PlayerRepository, player_server::PlayerServerRepository},
    error::repository::RepositoryError,
    model::player::{CreatePlayerParam, PlayerLookup},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod register;
mod register_with_profile;
