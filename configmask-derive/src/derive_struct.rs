//! Struct-specific `Maskable` derivation.
//!
//! This module generates the field walk and the masked `Debug` body for
//! struct fields and collects the where-predicates they require.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DataStruct, Fields, Member, Result, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    generics::push_field_bound,
    strategy::{Encoding, FieldOptions, Strategy, parse_field_strategy},
    types::is_phantom_data,
};

pub(crate) fn derive_struct(
    name: &Ident,
    data: &DataStruct,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let named = matches!(data.fields, Fields::Named(_));
    let field_meta = crate_path("FieldMeta");
    let placeholder = crate_path("MASKED_PLACEHOLDER");

    let mut visits = Vec::new();
    let mut debug_fields = Vec::new();
    let mut walk_bounds = Vec::new();
    let mut debug_bounds = Vec::new();
    let mut skipped_any = false;

    for (index, field) in data.fields.iter().enumerate() {
        let span = field.span();
        let ty = &field.ty;
        let strategy = parse_field_strategy(&field.attrs)?;

        let options = match strategy {
            Strategy::Visit(options) if !is_phantom_data(ty) => options,
            _ => {
                skipped_any = true;
                continue;
            }
        };

        let (member, field_name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
            None => (Member::Unnamed(index.into()), index.to_string()),
        };

        let meta = field_meta_tokens(&field_meta, &field_name, &options);
        let value = field_value(&member, &options, span);
        visits.push(quote_spanned! { span =>
            visitor.visit_field(&#meta, #value);
        });
        push_field_bound(&mut walk_bounds, generics, ty, walk_bound(options.encoding));

        let debug_value = if options.sensitive {
            quote! { &#placeholder }
        } else {
            push_field_bound(&mut debug_bounds, generics, ty, quote!(::core::fmt::Debug));
            quote! { &self.#member }
        };
        debug_fields.push(if named {
            quote_spanned! { span => debug.field(#field_name, #debug_value); }
        } else {
            quote_spanned! { span => debug.field(#debug_value); }
        });
    }

    let walk_body = if visits.is_empty() {
        quote! { let _ = visitor; }
    } else {
        quote! { #(#visits)* }
    };

    let debug_body = match data.fields {
        Fields::Named(_) => {
            let finish = if skipped_any {
                quote! { debug.finish_non_exhaustive() }
            } else {
                quote! { debug.finish() }
            };
            quote! {
                let mut debug = f.debug_struct(stringify!(#name));
                #(#debug_fields)*
                #finish
            }
        }
        Fields::Unnamed(_) => quote! {
            let mut debug = f.debug_tuple(stringify!(#name));
            #(#debug_fields)*
            debug.finish()
        },
        Fields::Unit => quote! {
            f.write_str(stringify!(#name))
        },
    };

    Ok(DeriveOutput {
        walk_body,
        walk_bounds,
        debug_body,
        debug_bounds,
    })
}

fn field_meta_tokens(field_meta: &TokenStream, name: &str, options: &FieldOptions) -> TokenStream {
    let mut meta = quote! { #field_meta::new(#name) };
    if let Some(key) = &options.key {
        meta = quote! { #meta.with_key(#key) };
    }
    if options.sensitive {
        meta = quote! { #meta.sensitive() };
    }
    meta
}

fn field_value(member: &Member, options: &FieldOptions, span: proc_macro2::Span) -> TokenStream {
    match options.encoding {
        Encoding::Field => quote_spanned! { span => &self.#member },
        Encoding::Display => {
            let adapter = crate_path("DisplayField");
            quote_spanned! { span => &#adapter(&self.#member) }
        }
        Encoding::Json => {
            let adapter = crate_path("JsonField");
            quote_spanned! { span => &#adapter(&self.#member) }
        }
    }
}

fn walk_bound(encoding: Encoding) -> TokenStream {
    match encoding {
        Encoding::Field => crate_path("MaskField"),
        Encoding::Display => quote!(::core::fmt::Display),
        Encoding::Json => {
            let serialize = crate_path("__private::Serialize");
            quote!(#serialize)
        }
    }
}
