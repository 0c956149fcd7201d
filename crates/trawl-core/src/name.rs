//! Name capability for index and type handles.
//!
//! Anything that can be added to a search scope implements [`HasName`]:
//! plain strings through a trivial adapter, and the [`Index`] / [`DocType`]
//! handles by returning their own name. Dynamic JSON values implement it too
//! and yield a name only when they hold a string.
//!
//! ```
//! use trawl_core::{DocType, HasName, Index};
//!
//! let index = Index::new("articles");
//! let doc_type = index.doc_type("post");
//!
//! assert_eq!(index.scope_name(), Some("articles"));
//! assert_eq!(doc_type.scope_name(), Some("post"));
//! assert_eq!(doc_type.index_name(), "articles");
//! assert_eq!("drafts".scope_name(), Some("drafts"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Extracts the name under which a value is addressed in a request path.
pub trait HasName {
    /// Returns the name, or `None` when the value carries no usable name.
    fn scope_name(&self) -> Option<&str>;
}

impl HasName for str {
    fn scope_name(&self) -> Option<&str> {
        Some(self)
    }
}

impl HasName for String {
    fn scope_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl HasName for Value {
    fn scope_name(&self) -> Option<&str> {
        self.as_str()
    }
}

impl<T: HasName + ?Sized> HasName for &T {
    fn scope_name(&self) -> Option<&str> {
        (**self).scope_name()
    }
}

// ============================================================================
// Index
// ============================================================================

/// Handle for a named index on the search service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Index {
    name: String,
}

impl Index {
    /// Creates a handle for the index with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a handle for a document type inside this index.
    pub fn doc_type(&self, name: impl Into<String>) -> DocType {
        DocType {
            index: self.name.clone(),
            name: name.into(),
        }
    }
}

impl HasName for Index {
    fn scope_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// DocType
// ============================================================================

/// Handle for a document type within an index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocType {
    index: String,
    name: String,
}

impl DocType {
    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the index this type belongs to.
    pub fn index_name(&self) -> &str {
        &self.index
    }

    /// Returns a handle for the owning index.
    pub fn index(&self) -> Index {
        Index::new(self.index.clone())
    }
}

impl HasName for DocType {
    fn scope_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index, self.name)
    }
}
