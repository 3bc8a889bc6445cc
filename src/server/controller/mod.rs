//! HTTP request handlers.
//!
//! Controllers validate required fields, convert DTOs into parameter models, call the
//! matching service and convert the resulting domain models back into DTOs.

pub mod friend;
pub mod param;
pub mod player;
