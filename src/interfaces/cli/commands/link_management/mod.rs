//! Link management commands

mod add;
mod list;
mod remove;
mod update;

pub use add::add_link;
pub use list::list_links;
pub use remove::remove_link;
pub use update::update_link;
