//! Entity identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Identity of a domain object: its object type plus a unique id
///
/// Rendered as `TYPE:uuid`, the form used in entity detail links.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId {
    object_type: String,
    id: Uuid,
}

impl EntityId {
    /// Create a new random id for the given object type
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            id: Uuid::new_v4(),
        }
    }

    /// Create an id from an existing UUID
    pub fn from_uuid(object_type: impl Into<String>, id: Uuid) -> Self {
        Self {
            object_type: object_type.into(),
            id,
        }
    }

    /// Parse an id from its `TYPE:uuid` form
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (object_type, id) = s
            .split_once(':')
            .ok_or_else(|| DomainError::InvalidEntityId(s.to_string()))?;
        if object_type.is_empty() {
            return Err(DomainError::InvalidEntityId(s.to_string()));
        }
        let id = Uuid::parse_str(id).map_err(|_| DomainError::InvalidEntityId(s.to_string()))?;
        Ok(Self::from_uuid(object_type, id))
    }

    /// Object type, e.g. `TODO`
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.object_type, self.id)
    }
}

impl std::str::FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
