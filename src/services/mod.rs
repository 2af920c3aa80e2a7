//! Service layer for business logic
//!
//! This module provides link business logic shared between the HTTP API
//! and the command-line interface.

mod link_service;

pub use link_service::*;
