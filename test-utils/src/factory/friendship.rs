//! Factory for friendship edges.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Inserts a friendship edge in canonical order.
///
/// The two ids are ordered so the lexicographically smaller one lands in `user`,
/// matching what the repository stores.
///
/// # Arguments
/// - `db` - Database connection
/// - `a` - Id of one endpoint
/// - `b` - Id of the other endpoint
///
/// # Returns
/// - `Ok(entity::friendship::Model)` - Created edge
/// - `Err(DbErr)` - Database error during insert
pub async fn create_friendship(
    db: &DatabaseConnection,
    a: &str,
    b: &str,
) -> Result<entity::friendship::Model, DbErr> {
    let (user, friend) = if a <= b { (a, b) } else { (b, a) };

    entity::prelude::Friendship::insert(entity::friendship::ActiveModel {
        user: ActiveValue::Set(user.to_string()),
        friend: ActiveValue::Set(friend.to_string()),
    })
    .exec_with_returning(db)
    .await
}
