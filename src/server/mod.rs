//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the school records API,
//! including API endpoints, request validation, persistence and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration of persistence operations and token issuance
//! - **Data Layer** (`data/`) - Repositories, persistence operations and the transactional executor
//! - **Model Layer** (`model/`) - Domain models, validated parameter types and their validators
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request context, authentication and the validator chain
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Authentication middleware** (protected routes only) verifies the `token` cookie and
//!    stores the decoded claims in the request context
//! 3. **Validator chain** turns the submitted form into typed parameters, stopping at the
//!    first failure with a 400 response
//! 4. **Controller** hands the parameters to a service
//! 5. **Service** builds an ordered list of persistence operations and runs them in a single
//!    transaction through the executor
//! 6. **Controller** converts the result into a DTO and returns the HTTP response

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
