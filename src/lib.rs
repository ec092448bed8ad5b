//! Strategy expression builder for the finance dashboard.
//!
//! - `models`: strategy, payload and market data types
//! - `strategies`: placement/editing transitions, expression serialization, lint
//! - `services`: evaluation and dashboard data HTTP clients
//! - `core`: the builder session (view state + submission lifecycle)

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;
pub mod strategies;
