//! Type descriptors: the runtime view of an entity type and its fields.

mod builder;
pub use builder::Builder;

mod field;
pub use field::{Accessor, Field};

mod model;
pub use model::Model;

mod name;
pub use name::Name;
