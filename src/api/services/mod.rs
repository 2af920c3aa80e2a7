pub mod helpers;
pub mod links;
pub mod redirect;
pub mod types;

pub use helpers::json_error_handler;
pub use links::{LinkApi, link_routes};
pub use redirect::{RedirectService, redirect_routes};
