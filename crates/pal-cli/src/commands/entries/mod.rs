//! Entry command handlers.

mod add;
mod delete;
mod list;
mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use list::handle_list;
pub use show::handle_show;
