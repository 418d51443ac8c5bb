use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

impl Expand<'_> {
    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let relmap = &self.relmap;
        let model_ident = &self.model.ident;
        let model_name = model_ident.unraw().to_string();
        let fields = self.expand_model_fields();

        quote! {
            impl #relmap::Entity for #model_ident {
                fn model() -> #relmap::schema::Model {
                    #relmap::schema::Model {
                        name: #relmap::schema::Name::new(#model_name),
                        path: ::std::string::String::from(
                            ::std::concat!(::std::module_path!(), "::", #model_name)
                        ),
                        fields: ::std::vec![ #( #fields ),* ],
                    }
                }
            }
        }
    }

    fn expand_model_fields(&self) -> Vec<TokenStream> {
        let relmap = &self.relmap;

        self.model
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let ty = &field.ty;
                let name = field.property_name();
                let references = match field.references_name() {
                    Some(target) => quote!(::std::option::Option::Some(
                        ::std::string::String::from(#target)
                    )),
                    None => quote!(::std::option::Option::None),
                };
                let accessor = self.expand_field_accessor(field);

                quote! {
                    #relmap::schema::Field {
                        index: #index,
                        name: ::std::string::String::from(#name),
                        ty: <#ty as #relmap::stmt::Primitive>::ty(),
                        nullable: <#ty as #relmap::stmt::Primitive>::NULLABLE,
                        references: #references,
                        accessor: ::std::option::Option::Some(#accessor),
                    }
                }
            })
            .collect()
    }
}
