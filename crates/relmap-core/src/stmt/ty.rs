/// The value type of a field, as seen by the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I32,
    I64,
    U64,
    String,
    Uuid,

    /// The value type is not known, e.g. a manually registered field that did
    /// not declare one.
    Unknown,
}
