use super::{ForeignKeyResolver, ResolvedForeignKey};
use crate::schema::{Field, Model};
use crate::{Error, Result};
use tracing::{debug, trace};

/// How a conventional foreign key name is spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyNaming {
    /// `{TypeName}{suffix}` with the type name as declared: `OrderId`.
    #[default]
    Pascal,

    /// `{type_name}_{suffix}` with the type name in snake case: `order_id`.
    Snake,
}

/// Resolves foreign keys by naming convention.
///
/// The including type's key name is first looked up on the source type
/// (one-to-one); failing that, the source type's key name is looked up on the
/// including type (one-to-many). Names are compared exactly.
#[derive(Debug, Clone, Default)]
pub struct DefaultForeignKeyResolver {
    naming: KeyNaming,

    /// Overrides the naming scheme's default suffix
    suffix: Option<String>,
}

#[derive(Debug, Default)]
pub struct Builder {
    naming: KeyNaming,
    suffix: Option<String>,
}

impl DefaultForeignKeyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn key_naming(&self) -> KeyNaming {
        self.naming
    }

    /// The conventional name of a foreign key referencing `model`.
    pub fn foreign_key_name(&self, model: &Model) -> String {
        match self.naming {
            KeyNaming::Pascal => {
                let suffix = self.suffix.as_deref().unwrap_or("Id");
                format!("{}{}", model.name, suffix)
            }
            KeyNaming::Snake => {
                let suffix = self.suffix.as_deref().unwrap_or("id");
                format!("{}_{}", model.name.snake_case(), suffix)
            }
        }
    }

    /// Looks for the foreign key on the source type.
    fn resolve_one_to_one<'a>(&self, source: &'a Model, including: &Model) -> Option<&'a Field> {
        let name = self.foreign_key_name(including);
        trace!(model = %source.path, candidate = %name, "looking for one-to-one foreign key");
        source.field_by_name(&name)
    }

    /// Looks for the foreign key on the including type.
    fn resolve_one_to_many<'a>(&self, source: &Model, including: &'a Model) -> Option<&'a Field> {
        let name = self.foreign_key_name(source);
        trace!(model = %including.path, candidate = %name, "looking for one-to-many foreign key");
        including.field_by_name(&name)
    }
}

impl ForeignKeyResolver for DefaultForeignKeyResolver {
    fn resolve<'a>(
        &self,
        source: &'a Model,
        including: &'a Model,
    ) -> Result<ResolvedForeignKey<'a>> {
        let resolved = if let Some(field) = self.resolve_one_to_one(source, including) {
            ResolvedForeignKey::one_to_one(field)
        } else if let Some(field) = self.resolve_one_to_many(source, including) {
            ResolvedForeignKey::one_to_many(field)
        } else {
            debug!(
                source = %source.path,
                including = %including.path,
                "no conventional foreign key found"
            );
            return Err(Error::foreign_key_not_resolved(
                &source.path,
                &including.path,
            ));
        };

        debug!(
            source = %source.path,
            including = %including.path,
            field = %resolved.field.name,
            relation = ?resolved.relation,
            "resolved foreign key"
        );

        Ok(resolved)
    }
}

impl Builder {
    pub fn key_naming(&mut self, naming: KeyNaming) -> &mut Self {
        self.naming = naming;
        self
    }

    /// Replaces the default `Id` / `id` suffix.
    pub fn key_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn build(&self) -> DefaultForeignKeyResolver {
        DefaultForeignKeyResolver {
            naming: self.naming,
            suffix: self.suffix.clone(),
        }
    }
}
