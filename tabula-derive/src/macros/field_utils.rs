//! Shared utilities for reading field attributes.

use syn::{Attribute, LitStr, Type};

/// Options collected from `#[table(...)]` attributes on one field.
#[derive(Debug, Default)]
pub struct FieldOptions {
    pub key: bool,
    pub skip: bool,
    pub rename: Option<String>,
}

/// Parse every `#[table(...)]` attribute on a field.
pub fn table_options(attrs: &[Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("table") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                options.key = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `key`, `skip` or `rename = \"...\"`"))
            }
        })?;
    }
    Ok(options)
}

/// Check if a type is Option<T>.
pub fn is_option_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
    {
        return segment.ident == "Option";
    }
    false
}
