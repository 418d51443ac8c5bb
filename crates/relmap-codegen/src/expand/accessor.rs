use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Get/set pair for one struct field. Both closures capture nothing so
    /// they coerce to the `fn` pointers `Accessor` stores.
    pub(super) fn expand_field_accessor(&self, field: &Field) -> TokenStream {
        let relmap = &self.relmap;
        let model_ident = &self.model.ident;
        let field_ident = &field.ident;
        let ty = &field.ty;

        quote! {
            #relmap::schema::Accessor::new(
                |record| {
                    let record = #relmap::schema::Accessor::downcast_ref::<#model_ident>(record)?;
                    ::std::result::Result::Ok(
                        <#ty as #relmap::stmt::Primitive>::into_value(
                            ::std::clone::Clone::clone(&record.#field_ident)
                        )
                    )
                },
                |record, value| {
                    let record = #relmap::schema::Accessor::downcast_mut::<#model_ident>(record)?;
                    record.#field_ident = <#ty as #relmap::stmt::Primitive>::load(value)?;
                    ::std::result::Result::Ok(())
                },
            )
        }
    }
}
