use crate::stmt::{Type, Value};
use crate::{Error, Result};
use std::any::{type_name, Any};
use std::fmt;

/// A single property of an entity type.
#[derive(Debug, Clone)]
pub struct Field {
    /// Position of the field in the declaring model's field list
    pub index: usize,

    /// Property name. Lookups by name are exact and case-sensitive.
    pub name: String,

    /// Value type of the property
    pub ty: Type,

    /// True if the property accepts `Value::Null`
    pub nullable: bool,

    /// Name of the type this field is declared to reference, if any.
    pub references: Option<String>,

    /// Reads and writes the property on a record. Absent for descriptors that
    /// were registered by hand without one.
    pub accessor: Option<Accessor>,
}

/// Get/set functions for one field of one record type.
///
/// Records are passed as `dyn Any` so that a descriptor can be used without
/// knowing the concrete record type statically.
#[derive(Clone, Copy)]
pub struct Accessor {
    get: fn(&dyn Any) -> Result<Value>,
    set: fn(&mut dyn Any, Value) -> Result<()>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Field {
        Field {
            index: 0,
            name: name.into(),
            ty,
            nullable: false,
            references: None,
            accessor: None,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Field {
        self.nullable = nullable;
        self
    }

    /// Declares that this field is a foreign key referencing `type_name`.
    pub fn references(mut self, type_name: impl Into<String>) -> Field {
        self.references = Some(type_name.into());
        self
    }

    pub fn accessor(mut self, accessor: Accessor) -> Field {
        self.accessor = Some(accessor);
        self
    }

    /// Returns `true` if this field declares a reference to `type_name`.
    pub fn is_reference_to(&self, type_name: &str) -> bool {
        self.references.as_deref() == Some(type_name)
    }

    /// Reads the field's value from `record`.
    pub fn get(&self, record: &dyn Any) -> Result<Value> {
        (self.expect_accessor()?.get)(record)
    }

    /// Writes `value` into the field on `record`.
    pub fn set(&self, record: &mut dyn Any, value: Value) -> Result<()> {
        if value.is_null() && !self.nullable {
            crate::bail!("field `{}` is not nullable", self.name);
        }
        (self.expect_accessor()?.set)(record, value)
    }

    fn expect_accessor(&self) -> Result<&Accessor> {
        self.accessor
            .as_ref()
            .ok_or_else(|| crate::err!("field `{}` has no accessor", self.name))
    }
}

impl Accessor {
    pub fn new(
        get: fn(&dyn Any) -> Result<Value>,
        set: fn(&mut dyn Any, Value) -> Result<()>,
    ) -> Accessor {
        Accessor { get, set }
    }

    /// Downcasts a record to `T`, failing if it is some other type.
    pub fn downcast_ref<T: Any>(record: &dyn Any) -> Result<&T> {
        record.downcast_ref::<T>().ok_or_else(record_mismatch::<T>)
    }

    /// Downcasts a record to `T`, failing if it is some other type.
    pub fn downcast_mut<T: Any>(record: &mut dyn Any) -> Result<&mut T> {
        record.downcast_mut::<T>().ok_or_else(record_mismatch::<T>)
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor")
    }
}

fn record_mismatch<T>() -> Error {
    crate::err!("record is not a `{}`", type_name::<T>())
}
