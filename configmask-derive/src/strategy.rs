//! Parsing of field attributes: `#[sensitive]`, `#[mask(...)]` and the
//! `rename` key of `#[serde(...)]`.
//!
//! This module maps attribute syntax to walk decisions and produces
//! structured errors for invalid forms.

use syn::{Attribute, LitStr, Meta, Result, Token, spanned::Spanned};

/// How a field is passed to the visitor.
///
/// | Attribute           | Encoding  | Value passed to the visitor  |
/// |---------------------|-----------|------------------------------|
/// | None                | `Field`   | the field (`MaskField`)      |
/// | `#[mask(display)]`  | `Display` | `DisplayField(&field)`       |
/// | `#[mask(json)]`     | `Json`    | `JsonField(&field)`          |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Encoding {
    Field,
    Display,
    Json,
}

#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) sensitive: bool,
    /// Serialization key override, `mask(rename)` first, then `serde(rename)`.
    pub(crate) key: Option<String>,
    pub(crate) encoding: Encoding,
}

#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// `#[mask(skip)]`: the field is never visited.
    Skip,
    Visit(FieldOptions),
}

#[derive(Default)]
struct Parsed {
    sensitive: Option<proc_macro2::Span>,
    skip: Option<proc_macro2::Span>,
    encoding: Option<(Encoding, proc_macro2::Span)>,
    rename: Option<String>,
    serde_rename: Option<String>,
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut parsed = Parsed::default();
    for attr in attrs {
        if attr.path().is_ident("sensitive") {
            if !matches!(attr.meta, Meta::Path(_)) {
                return Err(syn::Error::new(
                    attr.span(),
                    "#[sensitive] does not take arguments; use #[mask(...)] for other options",
                ));
            }
            set_sensitive(&mut parsed, attr.span())?;
        } else if attr.path().is_ident("mask") {
            parse_mask_attr(attr, &mut parsed)?;
        } else if attr.path().is_ident("serde") && parsed.serde_rename.is_none() {
            parsed.serde_rename = serde_rename(attr);
        }
    }

    if let Some(skip) = parsed.skip {
        if parsed.sensitive.is_some() || parsed.encoding.is_some() || parsed.rename.is_some() {
            return Err(syn::Error::new(
                skip,
                "`skip` cannot be combined with other field options",
            ));
        }
        return Ok(Strategy::Skip);
    }

    Ok(Strategy::Visit(FieldOptions {
        sensitive: parsed.sensitive.is_some(),
        key: parsed.rename.or(parsed.serde_rename),
        encoding: parsed.encoding.map_or(Encoding::Field, |(encoding, _)| encoding),
    }))
}

fn set_sensitive(parsed: &mut Parsed, span: proc_macro2::Span) -> Result<()> {
    if parsed.sensitive.is_some() {
        return Err(syn::Error::new(
            span,
            "field is marked sensitive more than once",
        ));
    }
    parsed.sensitive = Some(span);
    Ok(())
}

fn set_encoding(parsed: &mut Parsed, encoding: Encoding, span: proc_macro2::Span) -> Result<()> {
    if parsed.encoding.is_some() {
        return Err(syn::Error::new(
            span,
            "`display` and `json` are mutually exclusive and may appear once",
        ));
    }
    parsed.encoding = Some((encoding, span));
    Ok(())
}

fn parse_mask_attr(attr: &Attribute, parsed: &mut Parsed) -> Result<()> {
    if !matches!(attr.meta, Meta::List(_)) {
        return Err(syn::Error::new(
            attr.span(),
            "expected #[mask(...)] with options: sensitive, skip, display, json, rename = \"...\"",
        ));
    }
    attr.parse_nested_meta(|meta| {
        let span = meta.path.span();
        if meta.path.is_ident("sensitive") {
            set_sensitive(parsed, span)
        } else if meta.path.is_ident("skip") {
            if parsed.skip.is_some() {
                return Err(meta.error("duplicate `skip`"));
            }
            parsed.skip = Some(span);
            Ok(())
        } else if meta.path.is_ident("display") {
            set_encoding(parsed, Encoding::Display, span)
        } else if meta.path.is_ident("json") {
            set_encoding(parsed, Encoding::Json, span)
        } else if meta.path.is_ident("rename") {
            if parsed.rename.is_some() {
                return Err(meta.error("duplicate `rename`"));
            }
            let key: LitStr = meta.value()?.parse()?;
            parsed.rename = Some(key.value());
            Ok(())
        } else {
            Err(meta.error(
                "unknown field option; expected one of: sensitive, skip, display, json, rename",
            ))
        }
    })
}

/// Reads `rename = "..."` or `rename(serialize = "...")` from a serde
/// attribute. Anything serde accepts but this crate does not understand is
/// ignored.
fn serde_rename(attr: &Attribute) -> Option<String> {
    let mut rename = None;
    let _ = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("rename") {
            if meta.input.peek(Token![=]) {
                let key: LitStr = meta.value()?.parse()?;
                rename = Some(key.value());
            } else {
                meta.parse_nested_meta(|inner| {
                    let key: LitStr = inner.value()?.parse()?;
                    if inner.path.is_ident("serialize") {
                        rename = Some(key.value());
                    }
                    Ok(())
                })?;
            }
        } else if meta.input.peek(Token![=]) {
            meta.value()?.parse::<syn::Expr>()?;
        } else if meta.input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in meta.input);
            content.parse::<proc_macro2::TokenStream>()?;
        }
        Ok(())
    });
    rename
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    fn options(tokens: proc_macro2::TokenStream) -> FieldOptions {
        match parse_field_strategy(&parse_attrs(tokens)).unwrap() {
            Strategy::Visit(options) => options,
            Strategy::Skip => panic!("expected Visit"),
        }
    }

    fn error(tokens: proc_macro2::TokenStream) -> String {
        parse_field_strategy(&parse_attrs(tokens))
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn no_attribute_visits_plain_field() {
        let parsed = options(quote! {});
        assert!(!parsed.sensitive);
        assert_eq!(parsed.key, None);
        assert_eq!(parsed.encoding, Encoding::Field);
    }

    #[test]
    fn bare_sensitive_marks_field() {
        assert!(options(quote! { #[sensitive] }).sensitive);
        assert!(options(quote! { #[mask(sensitive)] }).sensitive);
    }

    #[test]
    fn sensitive_with_arguments_errors() {
        assert!(error(quote! { #[sensitive(Secret)] }).contains("does not take arguments"));
        assert!(error(quote! { #[sensitive = "yes"] }).contains("does not take arguments"));
    }

    #[test]
    fn sensitive_twice_errors() {
        assert!(error(quote! { #[sensitive] #[mask(sensitive)] }).contains("more than once"));
    }

    #[test]
    fn mask_rename_sets_key() {
        let parsed = options(quote! { #[mask(sensitive, rename = "db_password")] });
        assert!(parsed.sensitive);
        assert_eq!(parsed.key.as_deref(), Some("db_password"));
    }

    #[test]
    fn serde_rename_is_used_as_fallback() {
        let plain = options(quote! { #[serde(default, rename = "apiKey")] });
        assert_eq!(plain.key.as_deref(), Some("apiKey"));

        let split = options(quote! { #[serde(rename(serialize = "out", deserialize = "in"))] });
        assert_eq!(split.key.as_deref(), Some("out"));
    }

    #[test]
    fn serde_rename_after_other_options_is_found() {
        let parsed = options(quote! { #[serde(default = "default_port", rename = "p")] });
        assert_eq!(parsed.key.as_deref(), Some("p"));
    }

    #[test]
    fn mask_rename_wins_over_serde_rename() {
        let parsed = options(quote! {
            #[serde(rename = "serde_key")]
            #[mask(rename = "mask_key")]
        });
        assert_eq!(parsed.key.as_deref(), Some("mask_key"));
    }

    #[test]
    fn encodings_are_recognized() {
        assert_eq!(options(quote! { #[mask(display)] }).encoding, Encoding::Display);
        assert_eq!(options(quote! { #[mask(json)] }).encoding, Encoding::Json);
    }

    #[test]
    fn display_and_json_conflict() {
        assert!(error(quote! { #[mask(display, json)] }).contains("mutually exclusive"));
    }

    #[test]
    fn skip_returns_skip() {
        let strategy = parse_field_strategy(&parse_attrs(quote! { #[mask(skip)] })).unwrap();
        assert!(matches!(strategy, Strategy::Skip));
    }

    #[test]
    fn skip_with_other_options_errors() {
        assert!(error(quote! { #[mask(skip, sensitive)] }).contains("cannot be combined"));
        assert!(error(quote! { #[sensitive] #[mask(skip)] }).contains("cannot be combined"));
    }

    #[test]
    fn unknown_mask_option_errors() {
        assert!(error(quote! { #[mask(secret)] }).contains("unknown field option"));
    }

    #[test]
    fn bare_mask_errors() {
        assert!(error(quote! { #[mask] }).contains("expected #[mask(...)]"));
    }

    #[test]
    fn other_attributes_ignored() {
        let parsed = options(quote! {
            #[doc = "Database password"]
            #[serde(skip_serializing_if = "Option::is_none")]
        });
        assert!(!parsed.sensitive);
        assert_eq!(parsed.key, None);
    }
}
