//! Category repository
//!
//! Categories are kept in insertion order, which is also display order.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SpendwiseResult;
use crate::models::{Category, CategoryId};

use super::document::{load_or_default, save_document, DocumentStore, RecordKind};
use super::{read_guard, write_guard};

/// Serialized form of the categories document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// In-memory category collection
#[derive(Default)]
pub struct CategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with the stored document (empty on failure)
    pub fn load(&self, store: &dyn DocumentStore) -> SpendwiseResult<()> {
        let data: CategoryData = load_or_default(store, RecordKind::Categories);
        tracing::debug!(count = data.categories.len(), "loaded categories");
        *write_guard(&self.categories)? = data.categories;
        Ok(())
    }

    /// Persist the full collection
    pub fn save(&self, store: &dyn DocumentStore) -> SpendwiseResult<()> {
        let data = CategoryData {
            categories: self.get_all()?,
        };
        save_document(store, RecordKind::Categories, &data)
    }

    pub fn get(&self, id: CategoryId) -> SpendwiseResult<Option<Category>> {
        Ok(read_guard(&self.categories)?
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    /// Snapshot of all categories in display order
    pub fn get_all(&self) -> SpendwiseResult<Vec<Category>> {
        Ok(read_guard(&self.categories)?.clone())
    }

    /// Case-insensitive lookup by name
    pub fn get_by_name(&self, name: &str) -> SpendwiseResult<Option<Category>> {
        let name_lower = name.trim().to_lowercase();
        Ok(read_guard(&self.categories)?
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Categories whose id matches a short or full id fragment
    pub fn find_matching(&self, fragment: &str) -> SpendwiseResult<Vec<Category>> {
        Ok(read_guard(&self.categories)?
            .iter()
            .filter(|c| c.id.matches(fragment))
            .cloned()
            .collect())
    }

    pub fn insert(&self, category: Category) -> SpendwiseResult<()> {
        write_guard(&self.categories)?.push(category);
        Ok(())
    }

    /// Replace the category with the same id; `false` if there is none
    pub fn replace(&self, category: Category) -> SpendwiseResult<bool> {
        let mut categories = write_guard(&self.categories)?;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&self, id: CategoryId) -> SpendwiseResult<Option<Category>> {
        let mut categories = write_guard(&self.categories)?;
        Ok(categories
            .iter()
            .position(|c| c.id == id)
            .map(|index| categories.remove(index)))
    }

    pub fn count(&self) -> SpendwiseResult<usize> {
        Ok(read_guard(&self.categories)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::document::MemoryStore;

    #[test]
    fn test_empty_load() {
        let store = MemoryStore::new();
        let repo = CategoryRepository::new();
        repo.load(&store).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_category_operations() {
        let repo = CategoryRepository::new();
        let food = Category::new("Food", "fork.knife", "#FF9500");
        let id = food.id;

        repo.insert(food.clone()).unwrap();
        assert_eq!(repo.get(id).unwrap().unwrap().name, "Food");
        assert_eq!(repo.get_by_name("fOOD").unwrap().unwrap().id, id);

        let mut renamed = food;
        renamed.name = "Groceries".into();
        assert!(repo.replace(renamed).unwrap());
        assert_eq!(repo.get(id).unwrap().unwrap().name, "Groceries");

        assert!(!repo.replace(Category::new("Ghost", "x", "#000000")).unwrap());

        assert!(repo.remove(id).unwrap().is_some());
        assert!(repo.remove(id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_order_is_preserved() {
        let repo = CategoryRepository::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            repo.insert(Category::new(name, "x", "#000000")).unwrap();
        }
        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_save_and_reload() {
        let store = MemoryStore::new();
        let repo = CategoryRepository::new();
        let category = Category::new("Health", "heart.fill", "#FF3B30");
        repo.insert(category.clone()).unwrap();
        repo.save(&store).unwrap();

        let reloaded = CategoryRepository::new();
        reloaded.load(&store).unwrap();
        assert_eq!(reloaded.get_all().unwrap(), vec![category]);
    }
}
