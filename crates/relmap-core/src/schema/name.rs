use heck::ToSnakeCase;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    /// The name exactly as declared
    pub ident: String,

    /// Lowercase words making up the name
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = src
            .to_snake_case()
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();

        Self {
            ident: src.to_string(),
            parts,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.ident
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// Returns `true` if the declared name is a valid identifier.
    pub(crate) fn is_ident(&self) -> bool {
        let mut chars = self.ident.chars();
        match chars.next() {
            Some(c) if c.is_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_alphanumeric() || c == '_')
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ident)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.ident == other
    }
}
