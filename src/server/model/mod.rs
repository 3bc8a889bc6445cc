//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! players and friendships. Domain models are converted from entity models at the
//! repository boundary and transformed to DTOs at the controller boundary.

pub mod friendship;
pub mod player;
