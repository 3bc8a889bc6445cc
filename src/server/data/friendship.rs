//! Friendship repository for database operations.
//!
//! Provides the `FriendshipRepository` for adding undirected friendship edges and
//! resolving a player's friend list. Edges are stored once, in canonical order, and
//! matched from either column when reading.

use sea_orm::{
    sea_query::Query, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::transaction,
    error::repository::RepositoryError,
    model::{friendship::FriendPair, player::Player},
};

/// Repository for friendship edges between players.
pub struct FriendshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendshipRepository<'a> {
    /// Creates a new FriendshipRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a friendship between two players.
    ///
    /// The pair is canonicalized before the insert, so `add(a, b)` and `add(b, a)` target
    /// the same row and the second one is rejected as a duplicate. Neither id is checked
    /// for existence and equal ids are stored as a self loop.
    ///
    /// # Arguments
    /// - `user` - Id of one player
    /// - `friend` - Id of the other player
    ///
    /// # Returns
    /// - `Ok(FriendPair)` - The stored canonical edge
    /// - `Err(RepositoryError::DuplicateKey)` - The two players are already friends
    /// - `Err(RepositoryError::Unavailable)` - Any other storage failure
    pub async fn add(&self, user: &str, friend: &str) -> Result<FriendPair, RepositoryError> {
        let pair = FriendPair::new(user, friend);
        let txn = self.db.begin().await?;

        let result = entity::prelude::Friendship::insert(entity::friendship::ActiveModel {
            user: ActiveValue::Set(pair.user().to_string()),
            friend: ActiveValue::Set(pair.friend().to_string()),
        })
        .exec_without_returning(&txn)
        .await;

        transaction::finish(txn, result).await?;

        Ok(pair)
    }

    /// Lists every player sharing an edge with `player_id`, ordered by id.
    ///
    /// The edge set is read symmetrically: a player is a friend when its id sits in
    /// `friend` on a row whose `user` is `player_id`, or in `user` on a row whose `friend`
    /// is `player_id`. Only ids with a player row are returned. The player itself is not
    /// looked up, so an unknown id yields an empty list.
    ///
    /// # Arguments
    /// - `player_id` - Id whose friends to list
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Bare friend players (empty when there are none)
    /// - `Err(RepositoryError::Unavailable)` - Storage failure
    pub async fn get_friends(&self, player_id: &str) -> Result<Vec<Player>, RepositoryError> {
        let as_user = Query::select()
            .column(entity::friendship::Column::Friend)
            .from(entity::prelude::Friendship)
            .and_where(entity::friendship::Column::User.eq(player_id))
            .to_owned();
        let as_friend = Query::select()
            .column(entity::friendship::Column::User)
            .from(entity::prelude::Friendship)
            .and_where(entity::friendship::Column::Friend.eq(player_id))
            .to_owned();

        let txn = self.db.begin().await?;

        let result = entity::prelude::Player::find()
            .filter(
                Condition::any()
                    .add(entity::player::Column::Id.in_subquery(as_user))
                    .add(entity::player::Column::Id.in_subquery(as_friend)),
            )
            .order_by_asc(entity::player::Column::Id)
            .all(&txn)
            .await;

        let entities = transaction::finish(txn, result).await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }
}
