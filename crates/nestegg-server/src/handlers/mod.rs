//! HTTP request handlers

mod dashboard;
mod entries;

pub use dashboard::{get_dashboard, health, refresh_potential};
pub use entries::{create_entry, delete_entry, get_entry, list_entries, update_entry};
