//! JWKS Service Library
//!
//! Publishes a fixed JSON Web Key Set so that JWT consumers can verify
//! token signatures. Read-only: keys are compiled in, never generated or rotated.
//!
//! # Modules
//!
//! - `config` - Runtime configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `models` - Data models
//! - `observability` - Logging and metrics
//! - `routes` - Router construction
//! - `server` - Lambda and local runtimes
//! - `services` - Key set and encoding

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod routes;
pub mod server;
pub mod services;
