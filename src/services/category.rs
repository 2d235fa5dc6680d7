//! Category service
//!
//! Create, update and delete categories. Deleting a category removes the
//! budgets that target it; its transactions are left in place and show up
//! as uncategorized.

use chrono::Utc;

use crate::error::SpendwiseResult;
use crate::models::{Category, CategoryId};
use crate::storage::{RecordKind, Storage};

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new category
    pub fn create(&self, name: &str, icon: &str, color: &str) -> SpendwiseResult<Category> {
        let category = Category::new(name.trim(), icon.trim(), color.trim());
        category.validate()?;

        self.storage.categories.insert(category.clone())?;
        tracing::info!(id = %category.id, name = %category.name, "created category");
        self.storage.persist(&[RecordKind::Categories])?;

        Ok(category)
    }

    pub fn get(&self, id: CategoryId) -> SpendwiseResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name, then by id fragment
    pub fn find(&self, identifier: &str) -> SpendwiseResult<Option<Category>> {
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        let mut matches = self.storage.categories.find_matching(identifier)?;
        if matches.len() == 1 {
            return Ok(matches.pop());
        }

        Ok(None)
    }

    /// All categories in display order
    pub fn list(&self) -> SpendwiseResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Display name for `id`, "Unknown" when the category is gone
    pub fn name_of(&self, id: CategoryId) -> SpendwiseResult<String> {
        Ok(self
            .storage
            .categories
            .get(id)?
            .map(|c| c.name)
            .unwrap_or_else(|| "Unknown".to_string()))
    }

    /// Replace the stored category with the same id
    ///
    /// Returns `false` without touching storage when the id is unknown.
    pub fn update(&self, mut category: Category) -> SpendwiseResult<bool> {
        if self.storage.categories.get(category.id)?.is_none() {
            tracing::debug!(id = %category.id, "update of unknown category ignored");
            return Ok(false);
        }

        category.name = category.name.trim().to_string();
        category.validate()?;
        category.updated_at = Utc::now();
        self.storage.categories.replace(category.clone())?;

        tracing::info!(id = %category.id, name = %category.name, "updated category");
        self.storage.persist(&[RecordKind::Categories])?;
        Ok(true)
    }

    /// Delete a category and every budget targeting it
    ///
    /// Returns `false` without touching storage when the id is unknown.
    pub fn delete(&self, id: CategoryId) -> SpendwiseResult<bool> {
        if self.storage.categories.get(id)?.is_none() {
            tracing::debug!(%id, "delete of unknown category ignored");
            return Ok(false);
        }

        let removed = self.storage.budgets.remove_by_category(id)?;
        self.storage.categories.remove(id)?;
        tracing::info!(%id, budgets_removed = removed.len(), "deleted category");

        self.storage
            .commit(&[RecordKind::Budgets, RecordKind::Categories])?;
        Ok(true)
    }
}
