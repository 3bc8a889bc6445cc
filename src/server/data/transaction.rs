//! Transaction completion helpers shared by the repositories.
//!
//! A repository operation begins a transaction, runs its statements, then hands the
//! transaction to one of these helpers. Rollback is awaited explicitly on every error
//! path rather than left to the transaction's drop.

use sea_orm::{DatabaseTransaction, DbErr};

use crate::server::error::repository::RepositoryError;

/// Commits the transaction and returns `value`.
///
/// # Returns
/// - `Ok(T)` - Transaction committed
/// - `Err(RepositoryError)` - Commit failed, classified
pub async fn commit<T>(txn: DatabaseTransaction, value: T) -> Result<T, RepositoryError> {
    txn.commit().await?;
    Ok(value)
}

/// Rolls the transaction back and classifies the error that caused it.
///
/// A failing rollback is logged; the original error is the one reported.
pub async fn rollback(txn: DatabaseTransaction, err: DbErr) -> RepositoryError {
    if let Err(rollback_err) = txn.rollback().await {
        tracing::warn!("Failed to roll back transaction after '{}': {}", err, rollback_err);
    }

    RepositoryError::from(err)
}

/// Commits on `Ok`, rolls back on `Err`.
pub async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, DbErr>,
) -> Result<T, RepositoryError> {
    match result {
        Ok(value) => commit(txn, value).await,
        Err(err) => Err(rollback(txn, err).await),
    }
}
