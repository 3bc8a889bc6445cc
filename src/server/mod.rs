//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the player registry: HTTP endpoints,
//! business logic and data access for players, their server memberships and their
//! friendships. The backend uses Axum as the web framework and SeaORM for database
//! operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input validation, and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Transactional database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types, storage error classification and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Logging, database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route configuration and HTTP middleware
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** rejects missing fields, converts DTOs to params, calls service
//! 3. **Service** calls the repositories
//! 4. **Data** runs one transaction per operation, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
