//! Vertical grouping.

use serde::{Deserialize, Serialize};

use crate::capability::Capability;

/// A named content category with its own capability list and item
/// collection. An item's vertical membership is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vertical {
    /// Durable identifier used as the foreign key on items. Empty until the
    /// repository assigns one.
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Ordered capability list; declaration order is tile precedence.
    pub capabilities: Vec<Capability>,
}

impl Vertical {
    #[must_use]
    pub fn new(slug: &str, name: &str, description: &str, capabilities: Vec<Capability>) -> Self {
        Self {
            id: String::new(),
            slug: slug.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            capabilities,
        }
    }
}
