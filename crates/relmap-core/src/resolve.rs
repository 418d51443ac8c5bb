//! Foreign key resolution between two entity types.
//!
//! Given a *source* type and an *including* type (the type being eagerly
//! associated with it), a [`ForeignKeyResolver`] finds the field that links
//! them and reports which side of the relation holds it.

mod convention;
pub use convention::{Builder, DefaultForeignKeyResolver, KeyNaming};

mod explicit;
pub use explicit::ExplicitForeignKeyResolver;

use crate::schema::{Field, Model};
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// Finds the foreign key field relating two entity types.
///
/// Implementations must be pure: they only read the descriptors they are
/// given. [`DefaultForeignKeyResolver`] is used unless another implementation
/// is injected.
pub trait ForeignKeyResolver: fmt::Debug + Send + Sync {
    /// Resolves the foreign key between `source` and `including`.
    ///
    /// Returns an error naming both types when no field links them.
    fn resolve<'a>(
        &self,
        source: &'a Model,
        including: &'a Model,
    ) -> Result<ResolvedForeignKey<'a>>;
}

/// Which side of a relation holds the foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForeignKeyRelation {
    /// The key lives on the source type and references the including type.
    OneToOne,

    /// The key lives on the including type and references the source type.
    OneToMany,
}

/// A foreign key field borrowed from the descriptors it was resolved from.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedForeignKey<'a> {
    pub field: &'a Field,
    pub relation: ForeignKeyRelation,
}

/// Owned form of [`ResolvedForeignKey`].
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub field: Field,
    pub relation: ForeignKeyRelation,
}

impl ForeignKeyRelation {
    /// Returns the model that declares the foreign key field.
    pub fn key_owner<'a>(self, source: &'a Model, including: &'a Model) -> &'a Model {
        match self {
            ForeignKeyRelation::OneToOne => source,
            ForeignKeyRelation::OneToMany => including,
        }
    }
}

impl<'a> ResolvedForeignKey<'a> {
    pub fn one_to_one(field: &'a Field) -> Self {
        Self {
            field,
            relation: ForeignKeyRelation::OneToOne,
        }
    }

    pub fn one_to_many(field: &'a Field) -> Self {
        Self {
            field,
            relation: ForeignKeyRelation::OneToMany,
        }
    }

    pub fn into_owned(self) -> ForeignKey {
        ForeignKey {
            field: self.field.clone(),
            relation: self.relation,
        }
    }
}

impl<T: ForeignKeyResolver + ?Sized> ForeignKeyResolver for &T {
    fn resolve<'a>(
        &self,
        source: &'a Model,
        including: &'a Model,
    ) -> Result<ResolvedForeignKey<'a>> {
        (**self).resolve(source, including)
    }
}

impl<T: ForeignKeyResolver + ?Sized> ForeignKeyResolver for Box<T> {
    fn resolve<'a>(
        &self,
        source: &'a Model,
        including: &'a Model,
    ) -> Result<ResolvedForeignKey<'a>> {
        (**self).resolve(source, including)
    }
}

impl<T: ForeignKeyResolver + ?Sized> ForeignKeyResolver for Arc<T> {
    fn resolve<'a>(
        &self,
        source: &'a Model,
        including: &'a Model,
    ) -> Result<ResolvedForeignKey<'a>> {
        (**self).resolve(source, including)
    }
}
