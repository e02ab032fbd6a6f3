//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the rental marketplace: REST endpoints,
//! business logic, data access and the supporting infrastructure. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic such as draft reconciliation and booking pricing
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token keys, media store)
//! - **Storage** (`storage`) - Disk-backed media folders
//! - **Startup** (`startup`) - Database connection, migrations and media folders
//! - **Router** (`router`) - Axum route configuration, rate limiting and static media
//! - **Docs** (`docs`) - OpenAPI document served by Swagger UI
//! - **Scheduler** (`scheduler/`) - Cron job purging temp uploads and expired tokens
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** authenticates the caller, converts DTOs to params, calls service
//! 3. **Service** checks ownership, executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
