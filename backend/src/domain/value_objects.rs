/// Value objects for the domain layer
use super::base::ValueObject;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a Category, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        CategoryId(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        CategoryId(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        CategoryId::new()
    }
}

impl ValueObject for CategoryId {}

impl From<Uuid> for CategoryId {
    fn from(id: Uuid) -> Self {
        CategoryId(id)
    }
}

impl FromStr for CategoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(CategoryId)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
