//! Parsing of container-level `#[mask(...)]` attributes.

use syn::{Attribute, Result, spanned::Spanned};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// `#[mask(skip_debug)]`: do not generate the masked `Debug` impl.
    pub(crate) skip_debug: bool,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs {
        if attr.path().is_ident("sensitive") {
            return Err(syn::Error::new(
                attr.span(),
                "#[sensitive] is a field attribute; mark individual fields instead",
            ));
        }
        if !attr.path().is_ident("mask") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip_debug") {
                if options.skip_debug {
                    return Err(meta.error("duplicate `skip_debug`"));
                }
                options.skip_debug = true;
                Ok(())
            } else {
                Err(meta.error("unknown container option; expected `skip_debug`"))
            }
        })?;
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse(tokens: proc_macro2::TokenStream) -> Result<ContainerOptions> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        parse_container_options(&input.attrs)
    }

    #[test]
    fn defaults_without_attributes() {
        assert!(!parse(quote! {}).unwrap().skip_debug);
    }

    #[test]
    fn skip_debug_is_recognized() {
        assert!(parse(quote! { #[mask(skip_debug)] }).unwrap().skip_debug);
    }

    #[test]
    fn unknown_option_errors() {
        let err = parse(quote! { #[mask(sensitive)] }).unwrap_err();
        assert!(err.to_string().contains("unknown container option"));
    }

    #[test]
    fn sensitive_on_container_errors() {
        let err = parse(quote! { #[sensitive] }).unwrap_err();
        assert!(err.to_string().contains("field attribute"));
    }
}
