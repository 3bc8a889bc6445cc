//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates two players and a friendship edge between them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((player, friend))` - Both players, in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_friends(
    db: &DatabaseConnection,
) -> Result<(entity::player::Model, entity::player::Model), DbErr> {
    let player = crate::factory::player::create_player(db).await?;
    let friend = crate::factory::player::create_player(db).await?;
    crate::factory::friendship::create_friendship(db, &player.id, &friend.id).await?;

    Ok((player, friend))
}
