//! First-run setup
//!
//! An empty category collection after load is treated as a fresh install.

use crate::error::SpendwiseResult;
use crate::models::DefaultCategory;

use super::{RecordKind, Storage};

/// Insert and persist the built-in categories if there are none
///
/// Returns whether seeding happened.
pub fn seed_default_categories(storage: &Storage) -> SpendwiseResult<bool> {
    if storage.categories.count()? > 0 {
        return Ok(false);
    }

    for default in DefaultCategory::all() {
        storage.categories.insert(default.to_category())?;
    }
    tracing::info!(count = DefaultCategory::all().len(), "seeded default categories");

    storage.save(RecordKind::Categories)?;
    Ok(true)
}
