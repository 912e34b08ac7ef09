//! Resource trait describing a manageable entity type

use std::fmt::Debug;

/// Surrogate identifier assigned by the store
pub type ResourceId = i64;

/// A domain value managed by the generic datasource and service.
///
/// Implementors supply the per-entity plug-in points:
/// - naming used in messages and routes
/// - the uniqueness key (field name and accessor)
/// - which fields an update may replace
/// - store-side defaults applied on insert
///
/// Values carry no persistence metadata; mapping to rows is the job of
/// each store backend.
pub trait Resource: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Human-readable singular name used in messages (e.g., "Category")
    const ENTITY_NAME: &'static str;

    /// Plural collection name used in routes and messages (e.g., "categories")
    const COLLECTION_NAME: &'static str;

    /// Name of the field whose value must be unique across the collection
    const UNIQUE_FIELD: &'static str;

    /// Identifier, `None` until the store assigns one
    fn id(&self) -> Option<ResourceId>;

    /// Set the identifier (called by stores on insert)
    fn set_id(&mut self, id: ResourceId);

    /// Current value of the uniqueness key
    fn unique_key(&self) -> &str;

    /// Copy the update-mutable fields from `candidate` onto `self`.
    ///
    /// Fields not listed as mutable must be left untouched.
    fn apply_update(&mut self, candidate: Self);

    /// Fill in values the store assigns on insert
    fn apply_defaults(&mut self) {}

    /// Message used when an id does not reference an existing row
    fn not_found_message(id: ResourceId) -> String {
        format!("{} not found with ID: {}", Self::ENTITY_NAME, id)
    }

    /// Message used when the uniqueness key is already taken
    fn duplicate_message(key: &str) -> String {
        format!(
            "A {} with {} '{}' already exists",
            Self::ENTITY_NAME.to_lowercase(),
            Self::UNIQUE_FIELD,
            key
        )
    }
}
