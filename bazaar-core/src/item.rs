/// Free-form grouping label for catalog items.
///
/// Categories are open configuration data: context rule tables may name
/// groupings that no current item carries, so the type wraps a string rather
/// than enumerating a closed set.
///
/// # Examples
/// ```
/// use bazaar_core::Category;
///
/// let category = Category::new("Warm Clothing");
/// assert_eq!(category.as_str(), "Warm Clothing");
/// assert_eq!(Category::from("Warm Clothing"), category);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category(String);

impl Category {
    /// Wrap a category name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the category name as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry eligible for recommendation.
///
/// Items are immutable once loaded from the catalog source. The optional
/// feature vector carries an externally produced embedding (for example image
/// features) consumed by the visual similarity path; items without one are
/// simply invisible to that path.
///
/// # Examples
/// ```
/// use bazaar_core::Item;
///
/// let item = Item::new("product_1", "Warm Clothing", "Wool-lined winter coat");
/// assert_eq!(item.id, "product_1");
/// assert!(item.features.is_none());
///
/// let with_features = item.with_features(vec![0.1, 0.9]);
/// assert_eq!(with_features.features.as_deref(), Some([0.1, 0.9].as_slice()));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable identifier unique within the catalog.
    pub id: String,
    /// Grouping used by context rules and the diversity filter.
    pub category: Category,
    /// Free-text description backing the content similarity path.
    pub description: String,
    /// Optional embedding for visual similarity; `None` when no source image
    /// or model output exists for the item.
    pub features: Option<Vec<f32>>,
}

impl Item {
    /// Construct an `Item` without an embedding.
    ///
    /// # Examples
    /// ```
    /// use bazaar_core::Item;
    ///
    /// let item = Item::new("product_1", "Beach Wear", "Linen shirt");
    /// assert_eq!(item.category.as_str(), "Beach Wear");
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: impl Into<Category>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            description: description.into(),
            features: None,
        }
    }

    /// Attach an embedding while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_features(mut self, features: Vec<f32>) -> Self {
        self.features = Some(features);
        self
    }
}
