//! Care domain error taxonomy.
//!
//! # Responsibility
//! - Classify every caller-visible failure of the owner/pet/task tree.
//!
//! # Invariants
//! - Errors are raised at the point of validation and never recovered
//!   internally.
//! - A rejected insert leaves the target collection unchanged.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CareResult<T> = Result<T, CareError>;

/// Identity-bearing entity kinds in the ownership tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Owner,
    Pet,
    Task,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Pet => "pet",
            Self::Task => "task",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for care model and tracker operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareError {
    /// Malformed or out-of-range constructor/parameter input.
    InvalidArgument(String),
    /// Entity identity already exists in its owning collection.
    DuplicateKey { kind: EntityKind, key: String },
    /// Entity identity is absent from its owning collection.
    NotFound { kind: EntityKind, key: String },
}

impl CareError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn duplicate(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.into(),
        }
    }

    pub(crate) fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }
}

impl Display for CareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::DuplicateKey { kind, key } => write!(f, "{kind} already exists: `{key}`"),
            Self::NotFound { kind, key } => write!(f, "{kind} not found: `{key}`"),
        }
    }
}

impl Error for CareError {}

#[cfg(test)]
mod tests {
    use super::{CareError, EntityKind};

    #[test]
    fn display_names_entity_kind_and_key() {
        let err = CareError::duplicate(EntityKind::Pet, "Suki");
        assert_eq!(err.to_string(), "pet already exists: `Suki`");

        let err = CareError::not_found(EntityKind::Task, "Breakfast");
        assert_eq!(err.to_string(), "task not found: `Breakfast`");
    }
}
