mod entity;
pub use entity::Entity;

pub mod mapper;
pub use mapper::Mapper;

pub use relmap_core::{
    resolve, schema, stmt, DefaultForeignKeyResolver, Error, ExplicitForeignKeyResolver,
    ForeignKey, ForeignKeyRelation, ForeignKeyResolver, ResolvedForeignKey, Result,
};

pub use relmap_macros::Entity;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::Entity;
    pub use relmap_core::{schema, stmt};
}
