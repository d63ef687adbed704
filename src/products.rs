//! Products

/// Immutable descriptor for a catalog product as quoted in an offer.
///
/// Equality and hashing are structural over all three fields; two descriptors
/// with the same id, kind and name are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    id: String,
    kind: String,
    name: String,
}

impl Product {
    /// Creates a new product descriptor.
    ///
    /// No validation is applied; any strings are accepted, empty included.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Returns the product id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the product kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
