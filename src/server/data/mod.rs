//! Database repository layer for players, server memberships and friendships.
//!
//! Repositories borrow an injected `DatabaseConnection` and hold nothing else. Each
//! operation opens its own transaction, runs its statements on that transaction only, and
//! either commits or rolls back before returning. Entity models are converted to domain
//! models and `DbErr` to `RepositoryError` at this boundary.

pub mod friendship;
pub mod player;
pub mod player_server;
pub mod transaction;

#[cfg(test)]
mod test;
