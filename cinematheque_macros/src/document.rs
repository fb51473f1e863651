use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr};

pub fn derive_document(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let collection = match extract_collection(&input) {
        Ok(collection) => collection,
        Err(err) => return err.to_compile_error().into(),
    };

    let expanded = quote! {
        impl cinematheque::Document for #name {
            const COLLECTION: &'static str = #collection;
        }
    };

    TokenStream::from(expanded)
}

fn extract_collection(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("document") {
            continue;
        }

        let mut collection = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                collection = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported document attribute, expected `collection`"))
            }
        })?;

        if let Some(c) = collection {
            if c.is_empty() {
                return Err(syn::Error::new_spanned(attr, "collection name must not be empty"));
            }
            return Ok(c);
        }
    }

    // Default: snake_case struct name + "s"
    Ok(format!("{}s", to_snake_case(&input.ident.to_string())))
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
