use super::{Builder, Field, Name};

/// Runtime description of an entity type.
#[derive(Debug, Clone)]
pub struct Model {
    /// Short type name, e.g. `OrderLine`
    pub name: Name,

    /// Fully qualified type path, e.g. `shop::OrderLine`
    pub path: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    /// Finds a field by exact name. When several fields share the name, the
    /// first in declaration order is returned.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields that declare a reference to `type_name`, in declaration order.
    pub fn fields_referencing<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields
            .iter()
            .filter(move |field| field.is_reference_to(type_name))
    }
}
