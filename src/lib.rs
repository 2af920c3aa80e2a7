//! shortlink - a small URL shortener service
//!
//! A JSON API for creating, listing, editing and deleting short links, and a
//! public endpoint that redirects a short code to its original URL.
//!
//! # Architecture
//! - `storage`: `LinkStore` trait and the SeaORM backend (SQLite, MySQL, PostgreSQL)
//! - `services`: `LinkService`, the business rules shared by HTTP and CLI
//! - `api`: HTTP handlers and middleware
//! - `interfaces`: command-line management commands
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
