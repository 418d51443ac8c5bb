use super::{DefaultForeignKeyResolver, ForeignKeyResolver, ResolvedForeignKey};
use crate::schema::Model;
use crate::Result;
use tracing::debug;

/// Resolves foreign keys from explicit `references` declarations on fields,
/// deferring to another resolver when neither type declares one.
///
/// A source field referencing the including type is a one-to-one key; an
/// including field referencing the source type is a one-to-many key. The first
/// declared match wins.
#[derive(Debug, Clone, Default)]
pub struct ExplicitForeignKeyResolver<R = DefaultForeignKeyResolver> {
    fallback: R,
}

impl ExplicitForeignKeyResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ForeignKeyResolver> ExplicitForeignKeyResolver<R> {
    pub fn with_fallback(fallback: R) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> &R {
        &self.fallback
    }
}

impl<R: ForeignKeyResolver> ForeignKeyResolver for ExplicitForeignKeyResolver<R> {
    fn resolve<'a>(
        &self,
        source: &'a Model,
        including: &'a Model,
    ) -> Result<ResolvedForeignKey<'a>> {
        let declared = source
            .fields_referencing(including.name.as_str())
            .next()
            .map(ResolvedForeignKey::one_to_one)
            .or_else(|| {
                including
                    .fields_referencing(source.name.as_str())
                    .next()
                    .map(ResolvedForeignKey::one_to_many)
            });

        if let Some(resolved) = declared {
            debug!(
                source = %source.path,
                including = %including.path,
                field = %resolved.field.name,
                relation = ?resolved.relation,
                "resolved declared foreign key"
            );
            return Ok(resolved);
        }

        debug!(
            source = %source.path,
            including = %including.path,
            "no declared foreign key; using fallback resolver"
        );
        self.fallback.resolve(source, including)
    }
}
