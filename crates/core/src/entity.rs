//! Catalog entities: records addressed by a stable id and shown under a name.

/// A catalog record with a stable identifier and a display name.
///
/// The dataset validation pass is generic over this trait: ids must be unique
/// among siblings and names must not be blank.
pub trait Entity {
    /// Label used in validation messages (`"product"`, `"sub-brand"`).
    const KIND: &'static str;

    type Id: Eq + core::hash::Hash + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    fn name(&self) -> &str;
}
