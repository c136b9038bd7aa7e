//! Data access traits for catalog items.
//!
//! The `CatalogStore` trait defines a read-only interface for retrieving
//! [`Item`] values. Scoring strategies never load data themselves; they
//! consume a store supplied by the caller.

use thiserror::Error;

use crate::Item;

/// Errors raised by catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested item id has no catalog entry.
    #[error("item '{item_id}' is not present in the catalog")]
    UnknownItem {
        /// The id that failed to resolve.
        item_id: String,
    },
}

/// Read-only access to catalog items.
///
/// Implementations must yield items in a stable order across calls: ranking
/// tie-breaks and the diversity filter both depend on catalog iteration
/// order being reproducible.
///
/// # Examples
///
/// ```rust
/// use bazaar_core::{CatalogError, CatalogStore, Item};
///
/// struct MemoryStore {
///     items: Vec<Item>,
/// }
///
/// impl CatalogStore for MemoryStore {
///     fn item(&self, item_id: &str) -> Result<Item, CatalogError> {
///         self.items
///             .iter()
///             .find(|item| item.id == item_id)
///             .cloned()
///             .ok_or_else(|| CatalogError::UnknownItem {
///                 item_id: item_id.to_owned(),
///             })
///     }
///
///     fn items(&self) -> Box<dyn Iterator<Item = Item> + Send + '_> {
///         Box::new(self.items.iter().cloned())
///     }
/// }
///
/// let store = MemoryStore {
///     items: vec![Item::new("riser", "Work Gear", "Bamboo desk riser")],
/// };
/// assert!(store.contains("riser"));
/// assert!(store.item("ghost").is_err());
/// ```
pub trait CatalogStore {
    /// Look up a single item by id.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownItem`] when the id has no entry.
    fn item(&self, item_id: &str) -> Result<Item, CatalogError>;

    /// Iterate over every item in catalog order.
    fn items(&self) -> Box<dyn Iterator<Item = Item> + Send + '_>;

    /// True when `item_id` has a catalog entry.
    fn contains(&self, item_id: &str) -> bool {
        self.item(item_id).is_ok()
    }
}
