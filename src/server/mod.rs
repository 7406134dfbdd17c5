//! Hotel booking API backend.
//!
//! The backend uses Axum as the web framework, SeaORM on SQLite for persistence and
//! cookie sessions from `tower-sessions` for authentication.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as booking limits and the cascading hotel delete
//! - **Data Layer** (`data/`) - Database operations, including translating list queries into SQL
//! - **Model Layer** (`model/`) - Domain models, parameter types and the list query plan
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, session store, CORS and admin bootstrap
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session and checks permissions
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO inside the `{success, ...}` envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
