//! Business logic layer between controllers and repositories.
//!
//! Services take already-validated parameters, call one or more repositories and hand
//! domain models back to the controllers. Repository errors are passed through as
//! `AppError::RepositoryErr` so their kind survives to the HTTP mapping.

pub mod friend;
pub mod player;
