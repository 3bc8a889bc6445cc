use crate::server::{
    data::friendship::FriendshipRepository, error::repository::RepositoryError,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
