use relmap_core::schema::Model;
use std::any::Any;

/// A type with a runtime descriptor.
///
/// Usually implemented with `#[derive(relmap::Entity)]`.
pub trait Entity: Any + Sized {
    /// Builds the type's descriptor. A fresh descriptor is returned on every
    /// call.
    fn model() -> Model;
}
