use super::Error;

/// Error when no property links two types under the active resolution
/// strategy.
///
/// Carries the fully qualified paths of both types so the caller can tell
/// which include failed.
#[derive(Debug)]
pub(super) struct ForeignKeyNotResolved {
    source_type: Box<str>,
    including_type: Box<str>,
}

impl std::error::Error for ForeignKeyNotResolved {}

impl core::fmt::Display for ForeignKeyNotResolved {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "could not resolve foreign key property; source type `{}`; including type `{}`",
            self.source_type, self.including_type
        )
    }
}

impl Error {
    /// Creates a foreign key resolution error for the given source and
    /// including types.
    pub fn foreign_key_not_resolved(
        source_type: impl Into<String>,
        including_type: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::ForeignKeyNotResolved(
            ForeignKeyNotResolved {
                source_type: source_type.into().into(),
                including_type: including_type.into().into(),
            },
        ))
    }

    /// Returns `true` if this error, or any error in its context chain, is a
    /// foreign key resolution error.
    pub fn is_foreign_key_not_resolved(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::ForeignKeyNotResolved(_)))
    }
}
