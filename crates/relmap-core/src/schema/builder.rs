use super::{Field, Model, Name};
use crate::{Error, Result};

/// Builds a [`Model`] by hand, for types that do not derive `Entity`.
#[derive(Debug)]
pub struct Builder {
    name: String,

    /// If unset, the path is the name itself
    path: Option<String>,

    fields: Vec<Field>,
}

impl Builder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            fields: vec![],
        }
    }

    pub fn path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = Some(path.into());
        self
    }

    pub fn field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&mut self, fields: impl IntoIterator<Item = Field>) -> &mut Self {
        self.fields.extend(fields);
        self
    }

    /// Finishes the model. Field indices are assigned from declaration order.
    ///
    /// Fields sharing a name are kept; lookups return the first of them.
    pub fn build(&mut self) -> Result<Model> {
        if self.name.is_empty() {
            return Err(Error::invalid_schema("model name must not be empty"));
        }

        let name = Name::new(&self.name);
        if !name.is_ident() {
            return Err(Error::invalid_schema(format!(
                "`{}` is not a valid model name",
                self.name
            )));
        }

        let mut fields = std::mem::take(&mut self.fields);
        for (index, field) in fields.iter_mut().enumerate() {
            if field.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "field #{index} of model `{}` has an empty name",
                    self.name
                )));
            }
            field.index = index;
        }

        Ok(Model {
            path: self.path.take().unwrap_or_else(|| self.name.clone()),
            name,
            fields,
        })
    }
}
