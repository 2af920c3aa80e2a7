//! CLI command implementations

mod config_management;
mod link_management;

pub use config_management::config_generate;
pub use link_management::*;
