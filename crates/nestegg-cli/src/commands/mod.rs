//! Command implementations, split by domain

mod core;
mod dashboard;
mod entries;
mod serve;
mod transfer;

pub use core::{cmd_init, cmd_reset, cmd_status, open_db, resolve_db_path};
pub use dashboard::cmd_dashboard;
pub use entries::{cmd_add, cmd_entries_delete, cmd_entries_list, cmd_entries_update};
pub use serve::cmd_serve;
pub use transfer::{cmd_export, cmd_import};
