mod error;
pub use error::{Error, IntoError};

pub mod resolve;
pub use resolve::{
    DefaultForeignKeyResolver, ExplicitForeignKeyResolver, ForeignKey, ForeignKeyRelation,
    ForeignKeyResolver, ResolvedForeignKey,
};

pub mod schema;
pub use schema::{Field, Model};

pub mod stmt;

/// A Result type alias that uses relmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
