use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse2};

use super::field_utils::{is_option_type, table_options};

/// Derive macro for the TableRecord trait.
///
/// Generates `key()` from the `#[table(key)]` field (if any) and a `cell()`
/// that matches column ids against field names. The type must also derive
/// `Clone` separately.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };

    match generate(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn generate(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(TableRecord)] only supports structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(TableRecord)] requires named fields",
        ));
    };

    let mut key_fn = None;
    let mut arms = Vec::new();

    for field in &fields.named {
        let options = table_options(&field.attrs)?;
        let Some(ident) = &field.ident else {
            continue;
        };

        if options.key {
            if key_fn.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field can be marked #[table(key)]",
                ));
            }
            let body = if is_option_type(&field.ty) {
                quote! {
                    ::std::clone::Clone::clone(&self.#ident).map(tabula::RowKey::from)
                }
            } else {
                quote! {
                    ::std::option::Option::Some(tabula::RowKey::from(
                        ::std::clone::Clone::clone(&self.#ident),
                    ))
                }
            };
            key_fn = Some(quote! {
                fn key(&self) -> ::std::option::Option<tabula::RowKey> {
                    #body
                }
            });
        }

        if options.skip {
            continue;
        }
        let column_id = options.rename.unwrap_or_else(|| ident.to_string());
        arms.push(quote! {
            #column_id => tabula::CellValue::from(::std::clone::Clone::clone(&self.#ident)),
        });
    }

    Ok(quote! {
        impl #impl_generics tabula::TableRecord for #name #ty_generics #where_clause {
            #key_fn

            fn cell(&self, column_id: &str) -> tabula::CellValue {
                match column_id {
                    #(#arms)*
                    _ => tabula::CellValue::Empty,
                }
            }
        }
    })
}
