//! HTTP API: routing, request validation, and response mapping for items.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
