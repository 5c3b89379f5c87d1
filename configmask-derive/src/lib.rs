//! Derive macros for `configmask`.
//!
//! This crate generates the field walk behind `#[derive(Masked)]` and the
//! leaf capability behind `#[derive(MaskDisplay)]`. It:
//! - reads `#[sensitive]`, `#[mask(...)]` and `#[serde(rename = "...")]`
//!   attributes
//! - emits `Maskable`, `MaskField`, masked `Debug` and (with the `slog`
//!   feature) `slog::Value` implementations
//!
//! It does **not** render anything. The masking rules live in the main
//! `configmask` crate and run when the record is displayed.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, parse_quote, spanned::Spanned};

mod container;
mod derive_struct;
mod generics;
mod strategy;
mod types;
use container::{ContainerOptions, parse_container_options};
use derive_struct::derive_struct;
use generics::{FieldBound, add_field_bounds};

/// Derives `configmask::Maskable` (and related impls) for structs.
///
/// # Container Attributes
///
/// - `#[mask(skip_debug)]` - Opt out of `Debug` impl generation. Use this when you need a
///   custom `Debug` implementation or the type already derives `Debug`.
///
/// # Field Attributes
///
/// - **No annotation**: the field is visited as a plain value. Its type must implement
///   `MaskField` (leaves, std containers, and other `Masked` records do).
/// - `#[sensitive]` or `#[mask(sensitive)]`: the value is masked in every output.
/// - `#[mask(rename = "key")]`: key used in masked JSON. Without it, a
///   `#[serde(rename = "key")]` on the same field is honored.
/// - `#[mask(display)]`: encode through `Display` instead of `MaskField`.
/// - `#[mask(json)]`: encode through `serde::Serialize` instead of `MaskField`.
/// - `#[mask(skip)]`: the field never appears in masked output.
///
/// `PhantomData` fields are skipped automatically. Tuple struct fields are named by index.
///
/// Enums and unions are rejected at compile time.
///
/// # Additional Generated Impls
///
/// - `MaskField`: the record can be nested in other records. Its display value is its safe map.
/// - `Debug`: sensitive fields are formatted as `"******"`, skipped fields are omitted.
/// - `slog::Value` (behind the `slog` feature): emits the masked JSON as nested structured data.
#[proc_macro_derive(Masked, attributes(sensitive, mask))]
pub fn derive_masked(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Derives `configmask::MaskField` for a leaf type that implements `Display`.
///
/// The value is shown through `Display` in the safe map and emitted as a JSON
/// string in masked JSON. Use it for enums and newtypes that appear as config
/// fields:
///
/// ```ignore
/// #[derive(MaskDisplay)]
/// enum Level { Debug, Info }
///
/// impl fmt::Display for Level { /* ... */ }
/// ```
#[proc_macro_derive(MaskDisplay)]
pub fn derive_mask_display(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_mask_display(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand_mask_display(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        mut generics,
        data,
        ..
    } = input;

    if let Data::Union(u) = &data {
        return Err(syn::Error::new(
            u.union_token.span(),
            "`MaskDisplay` cannot be derived for unions",
        ));
    }

    let crate_root = crate_root();
    let (_, ty_generics, _) = generics.split_for_impl();
    let self_ty: syn::Type = parse_quote!(#ident #ty_generics);
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#self_ty: ::core::fmt::Display));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::MaskField for #ident #ty_generics #where_clause {
            fn display_value(&self) -> ::std::string::String {
                ::std::string::ToString::to_string(self)
            }

            fn encode_text(&self) -> ::core::option::Option<::std::string::String> {
                ::core::option::Option::Some(::std::string::ToString::to_string(self))
            }
        }
    })
}

/// Path to the `configmask` crate. Inside `configmask` itself (unit tests and
/// doctests included) this relies on `extern crate self as configmask`.
fn crate_root() -> proc_macro2::TokenStream {
    match crate_name("configmask") {
        Ok(FoundCrate::Itself) => quote! { ::configmask },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::configmask },
    }
}

fn crate_path(item: &str) -> proc_macro2::TokenStream {
    let root = crate_root();
    match syn::parse_str::<syn::Path>(item) {
        Ok(path) => quote! { #root::#path },
        Err(err) => err.into_compile_error(),
    }
}

struct DeriveOutput {
    walk_body: TokenStream,
    walk_bounds: Vec<FieldBound>,
    debug_body: TokenStream,
    debug_bounds: Vec<FieldBound>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { skip_debug } = parse_container_options(&attrs)?;

    let crate_root = crate_root();

    let derive_output = match &data {
        Data::Struct(data) => derive_struct(&ident, data, &generics)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Masked` cannot be derived for enums; derive `MaskDisplay` for enum leaves",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Masked` cannot be derived for unions",
            ));
        }
    };

    let walk_generics = add_field_bounds(generics.clone(), &derive_output.walk_bounds);
    let (impl_generics, ty_generics, where_clause) = walk_generics.split_for_impl();
    let walk_body = &derive_output.walk_body;

    let debug_impl = if skip_debug {
        quote! {}
    } else {
        let debug_generics = add_field_bounds(generics.clone(), &derive_output.debug_bounds);
        let (debug_impl_generics, debug_ty_generics, debug_where_clause) =
            debug_generics.split_for_impl();
        let debug_body = &derive_output.debug_body;
        quote! {
            impl #debug_impl_generics ::core::fmt::Debug for #ident #debug_ty_generics #debug_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_body
                }
            }
        }
    };

    // Only generate slog impl when the slog feature is enabled on configmask-derive.
    #[cfg(feature = "slog")]
    let slog_impl = {
        let slog_crate = quote! { #crate_root::__private::slog };
        quote! {
            impl #impl_generics #slog_crate::Value for #ident #ty_generics #where_clause {
                fn serialize(
                    &self,
                    record: &#slog_crate::Record<'_>,
                    key: #slog_crate::Key,
                    serializer: &mut dyn #slog_crate::Serializer,
                ) -> #slog_crate::Result {
                    #crate_root::slog::serialize_masked(self, record, key, serializer)
                }
            }
        }
    };

    #[cfg(not(feature = "slog"))]
    let slog_impl = quote! {};

    Ok(quote! {
        impl #impl_generics #crate_root::Maskable for #ident #ty_generics #where_clause {
            fn walk_fields(&self, visitor: &mut dyn #crate_root::FieldVisitor) {
                #walk_body
            }
        }

        impl #impl_generics #crate_root::MaskField for #ident #ty_generics #where_clause {
            fn display_value(&self) -> ::std::string::String {
                ::std::string::ToString::to_string(&#crate_root::to_safe_map(self))
            }

            fn as_record(&self) -> ::core::option::Option<&dyn #crate_root::Maskable> {
                ::core::option::Option::Some(self)
            }
        }

        #debug_impl

        #slog_impl
    })
}
