//! trivia-server: HTTP API backing the trivia quiz app
//!
//! Serves categories and questions out of PostgreSQL, pages through the
//! question list, and hands out random quiz questions.

pub mod db;
pub mod http;
pub mod models;
pub mod quiz;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
