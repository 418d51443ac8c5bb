use super::{Type, Value};
use crate::{Error, Result};

/// A Rust type that can be stored in an entity field.
pub trait Primitive: Sized {
    /// Whether the field accepts `Value::Null`.
    const NULLABLE: bool = false;

    /// The value type of fields holding `Self`.
    fn ty() -> Type;

    /// Converts a value into `Self`.
    fn load(value: Value) -> Result<Self>;

    /// Converts `self` into a value.
    fn into_value(self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $t:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl Primitive for $t {
                fn ty() -> Type {
                    Type::$variant
                }

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        value => Err(Error::type_conversion(value, stringify!($t))),
                    }
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

impl_primitive!(
    bool => Bool,
    i32 => I32,
    i64 => I64,
    u64 => U64,
    String => String,
    uuid::Uuid => Uuid,
);

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn ty() -> Type {
        T::ty()
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}
