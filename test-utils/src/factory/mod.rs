//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories write straight to the tables and bypass the
//! repositories under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let player = factory::create_player(&db).await?;
//!     factory::register_player(&db, &player.id, "Kanto").await?;
//!
//!     let (alice, bob) = factory::helpers::create_friends(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::player::PlayerFactory::new(&db)
//!     .id("u1")
//!     .username("Ash")
//!     .egg_ultra(Some(true))
//!     .build()
//!     .await?;
//! ```

pub mod friendship;
pub mod helpers;
pub mod player;
pub mod player_server;

pub use friendship::create_friendship;
pub use player::{create_player, create_player_with_id};
pub use player_server::register_player;
