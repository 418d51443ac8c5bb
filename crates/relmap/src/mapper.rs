use crate::Entity;

use relmap_core::schema::Model;
use relmap_core::stmt::Value;
use relmap_core::{
    DefaultForeignKeyResolver, ForeignKey, ForeignKeyRelation, ForeignKeyResolver,
    ResolvedForeignKey, Result,
};
use std::sync::Arc;
use tracing::debug;

/// Entry point used by query builders to relate entity types.
///
/// Holds the foreign key resolution strategy. Cloning is cheap; the resolver
/// is shared.
#[derive(Debug, Clone)]
pub struct Mapper {
    resolver: Arc<dyn ForeignKeyResolver>,
}

#[derive(Debug, Default)]
pub struct Builder {
    /// If unset, `DefaultForeignKeyResolver` is used
    resolver: Option<Arc<dyn ForeignKeyResolver>>,
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn resolver(&self) -> &dyn ForeignKeyResolver {
        &*self.resolver
    }

    /// Resolves the foreign key between two descriptors.
    pub fn resolve<'a>(
        &self,
        source: &'a Model,
        including: &'a Model,
    ) -> Result<ResolvedForeignKey<'a>> {
        self.resolver
            .resolve(source, including)
            .map_err(|err| err.context("resolving foreign key for include"))
    }

    /// Resolves the foreign key between two entity types.
    pub fn foreign_key<S: Entity, I: Entity>(&self) -> Result<ForeignKey> {
        let source = S::model();
        let including = I::model();

        self.resolve(&source, &including)
            .map(ResolvedForeignKey::into_owned)
    }

    /// Reads the foreign key value linking `source` to `including`, from
    /// whichever record holds the key.
    pub fn key_value<S: Entity, I: Entity>(&self, source: &S, including: &I) -> Result<Value> {
        let foreign_key = self.foreign_key::<S, I>()?;

        match foreign_key.relation {
            ForeignKeyRelation::OneToOne => foreign_key.field.get(source),
            ForeignKeyRelation::OneToMany => foreign_key.field.get(including),
        }
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Builder::default().build()
    }
}

impl Builder {
    /// Replaces the foreign key resolution strategy.
    pub fn foreign_key_resolver(
        &mut self,
        resolver: impl ForeignKeyResolver + 'static,
    ) -> &mut Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn build(&mut self) -> Mapper {
        let resolver = self
            .resolver
            .take()
            .unwrap_or_else(|| {
                Arc::new(DefaultForeignKeyResolver::new()) as Arc<dyn ForeignKeyResolver>
            });

        debug!(?resolver, "building mapper");

        Mapper { resolver }
    }
}
