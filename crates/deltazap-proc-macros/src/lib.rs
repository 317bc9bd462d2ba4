// deltazap-core/deltazap-proc-macros
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Implements `From<&AppDependencies>` for a struct. Fields marked with `#[inject]` are cloned
/// from the field with the same name in `AppDependencies`, all other fields are initialized
/// with their default value.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_deps(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    let Data::Struct(struct_data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "This macro only supports structs.")
            .to_compile_error()
            .into();
    };

    let Fields::Named(fields) = &struct_data.fields else {
        return syn::Error::new_spanned(
            &input.ident,
            "This macro only supports structs with named fields.",
        )
        .to_compile_error()
        .into();
    };

    let field_initialization = fields.named.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let injected = field.attrs.iter().any(|attr| attr.path().is_ident("inject"));
        Some(if injected {
            quote! { #ident: deps.#ident.clone() }
        } else {
            quote! { #ident: Default::default() }
        })
    });

    let name = &input.ident;
    let expanded = quote! {
        impl From<&crate::app::deps::AppDependencies> for #name {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
