use super::ErrorSet;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust identifier of the struct field
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Property name override: `#[relmap(rename = "OrderId")]`
    pub(crate) rename: Option<syn::LitStr>,

    /// Declared target of a foreign key: `#[relmap(references = Order)]`
    pub(crate) references: Option<syn::Path>,

    /// True if the field is left out of the descriptor: `#[relmap(skip)]`
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("relmap") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        errs.push(syn::Error::new_spanned(&lit, "property name must not be empty"));
                    } else if attrs.rename.is_some() {
                        errs.push(meta.error("duplicate `rename` attribute"));
                    } else {
                        attrs.rename = Some(lit);
                    }
                } else if meta.path.is_ident("references") {
                    let path: syn::Path = meta.value()?.parse()?;
                    if attrs.references.is_some() {
                        errs.push(meta.error("duplicate `references` attribute"));
                    } else {
                        attrs.references = Some(path);
                    }
                } else if meta.path.is_ident("skip") {
                    if attrs.skip {
                        errs.push(meta.error("duplicate `skip` attribute"));
                    }
                    attrs.skip = true;
                } else {
                    return Err(meta.error("unsupported relmap attribute"));
                }
                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        if attrs.skip && (attrs.rename.is_some() || attrs.references.is_some()) {
            errs.push(syn::Error::new_spanned(
                ident,
                "`skip` cannot be combined with other relmap attributes",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            attrs,
            ty: field.ty.clone(),
        })
    }

    /// The property name exposed by the descriptor.
    pub(crate) fn property_name(&self) -> String {
        match &self.attrs.rename {
            Some(lit) => lit.value(),
            None => self.ident.unraw().to_string(),
        }
    }

    /// The name of the referenced type: the last segment of the declared path.
    pub(crate) fn references_name(&self) -> Option<String> {
        let path = self.attrs.references.as_ref()?;
        path.segments
            .last()
            .map(|segment| segment.ident.unraw().to_string())
    }
}
