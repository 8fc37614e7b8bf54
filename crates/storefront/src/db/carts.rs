//! Fixed cart contents.

use shutterhive_core::checkout::CartLine;
use shutterhive_core::repository::{CartRepository, RepositoryError};

/// A cart whose lines never change.
///
/// There is no add-to-cart flow yet, so every visitor checks out the same
/// lines.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCart {
    lines: Vec<CartLine>,
}

impl InMemoryCart {
    #[must_use]
    pub const fn new(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }
}

impl CartRepository for InMemoryCart {
    fn lines(&self) -> Result<Vec<CartLine>, RepositoryError> {
        Ok(self.lines.clone())
    }
}
