//! Normalization layer between the raw government datasets and the portal
//! item model.
//!
//! One module per vertical, each holding the raw record shape (upstream
//! column names preserved through serde renames), a mock fetcher standing in
//! for the real download, and a pure `normalize` function. All I/O (fetching
//! raw data, persisting items) belongs to the caller.

mod batch;
mod food;
mod medication;
mod vehicle;

pub use batch::*;
pub use food::*;
pub use medication::*;
pub use vehicle::*;

use uuid::Uuid;

/// Stable item id: a v5 UUID over `vertical/slug`, so re-normalizing the
/// same raw record always produces the same id.
#[must_use]
pub fn item_id(vertical_slug: &str, item_slug: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, format!("{vertical_slug}/{item_slug}").as_bytes())
        .to_string()
}
