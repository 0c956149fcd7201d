//! Target scope of a search: the indices and types it runs against.

use trawl_core::{Error, HasName, Result};

use crate::path;

/// Ordered index and type names.
///
/// Names are appended in call order, duplicates included. A scope only
/// grows; there is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    indices: Vec<String>,
    types: Vec<String>,
}

impl Scope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an index.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when `index` yields no name or an empty one.
    /// The scope is left unchanged in that case.
    pub fn add_index<N: HasName + ?Sized>(&mut self, index: &N) -> Result<&mut Self> {
        let name = resolve_name(index, "index")?;
        self.indices.push(name);
        Ok(self)
    }

    /// Appends each index in order, stopping at the first invalid one.
    pub fn add_indices<I>(&mut self, indices: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: HasName,
    {
        for index in indices {
            self.add_index(&index)?;
        }
        Ok(self)
    }

    /// Appends a type.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when `doc_type` yields no name or an empty one.
    pub fn add_type<N: HasName + ?Sized>(&mut self, doc_type: &N) -> Result<&mut Self> {
        let name = resolve_name(doc_type, "type")?;
        self.types.push(name);
        Ok(self)
    }

    /// Appends each type in order, stopping at the first invalid one.
    pub fn add_types<I>(&mut self, types: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: HasName,
    {
        for doc_type in types {
            self.add_type(&doc_type)?;
        }
        Ok(self)
    }

    /// Index names in insertion order.
    pub fn indices(&self) -> &[String] {
        &self.indices
    }

    /// Type names in insertion order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Returns `true` if at least one index was added.
    pub fn has_indices(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Returns `true` if at least one type was added.
    pub fn has_types(&self) -> bool {
        !self.types.is_empty()
    }

    /// Request path for the current scope.
    pub fn path(&self) -> String {
        path::build(&self.indices, &self.types)
    }
}

fn resolve_name<N: HasName + ?Sized>(value: &N, kind: &str) -> Result<String> {
    match value.scope_name() {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        Some(_) => Err(Error::invalid_input(format!("{kind} name must not be empty"))),
        None => Err(Error::invalid_input(format!(
            "{kind} must be a name or expose one"
        ))),
    }
}
