//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added as where-predicates on field types, and only for fields
//! whose type mentions one of the container's type parameters:
//!
//! ```ignore
//! #[derive(Masked)]
//! struct Pool<T, B> {
//!     name: String,       // no predicate
//!     limits: Vec<T>,     // Vec<T>: MaskField
//!     #[mask(display)]
//!     backend: B,         // B: Display
//!     _marker: PhantomData<T>,  // never visited, no predicate
//! }
//! ```

use proc_macro2::TokenStream;
use syn::{Ident, parse_quote};

fn push_if_generic(ident: &Ident, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if generics.type_params().any(|param| param.ident == *ident)
        && !result.iter().any(|g| g == ident)
    {
        result.push(ident.clone());
    }
}

fn visit_type_param_bound(
    bound: &syn::TypeParamBound,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    if let syn::TypeParamBound::Trait(trait_bound) = bound {
        visit_path(&trait_bound.path, generics, result);
    }
}

fn visit_path_arguments(
    args: &syn::PathArguments,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match args {
        syn::PathArguments::AngleBracketed(args) => {
            for arg in &args.args {
                match arg {
                    syn::GenericArgument::Type(inner_ty) => {
                        visit_type(inner_ty, generics, result);
                    }
                    syn::GenericArgument::AssocType(assoc) => {
                        visit_type(&assoc.ty, generics, result);
                    }
                    syn::GenericArgument::Constraint(constraint) => {
                        for bound in &constraint.bounds {
                            visit_type_param_bound(bound, generics, result);
                        }
                    }
                    _ => {}
                }
            }
        }
        syn::PathArguments::Parenthesized(args) => {
            for input in &args.inputs {
                visit_type(input, generics, result);
            }
            if let syn::ReturnType::Type(_, output) = &args.output {
                visit_type(output, generics, result);
            }
        }
        syn::PathArguments::None => {}
    }
}

fn visit_path(path: &syn::Path, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if let Some(last_segment) = path.segments.last() {
        if last_segment.ident == "PhantomData" {
            return;
        }
    }

    for segment in &path.segments {
        push_if_generic(&segment.ident, generics, result);
        visit_path_arguments(&segment.arguments, generics, result);
    }
}

fn visit_type(ty: &syn::Type, generics: &syn::Generics, result: &mut Vec<Ident>) {
    match ty {
        syn::Type::Path(type_path) => {
            if let Some(qself) = &type_path.qself {
                visit_type(&qself.ty, generics, result);
            }
            visit_path(&type_path.path, generics, result);
        }
        syn::Type::Reference(reference) => visit_type(&reference.elem, generics, result),
        syn::Type::Ptr(pointer) => visit_type(&pointer.elem, generics, result),
        syn::Type::Slice(slice) => visit_type(&slice.elem, generics, result),
        syn::Type::Array(array) => visit_type(&array.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                visit_type(elem, generics, result);
            }
        }
        syn::Type::Paren(paren) => visit_type(&paren.elem, generics, result),
        syn::Type::Group(group) => visit_type(&group.elem, generics, result),
        syn::Type::TraitObject(obj) => {
            for bound in &obj.bounds {
                visit_type_param_bound(bound, generics, result);
            }
        }
        syn::Type::ImplTrait(impl_trait) => {
            for bound in &impl_trait.bounds {
                visit_type_param_bound(bound, generics, result);
            }
        }
        syn::Type::BareFn(bare_fn) => {
            for input in &bare_fn.inputs {
                visit_type(&input.ty, generics, result);
            }
            if let syn::ReturnType::Type(_, output) = &bare_fn.output {
                visit_type(output, generics, result);
            }
        }
        _ => {}
    }
}

/// Returns `true` if `ty` mentions a type parameter of `generics`.
pub(crate) fn mentions_generics(ty: &syn::Type, generics: &syn::Generics) -> bool {
    let mut found = Vec::new();
    visit_type(ty, generics, &mut found);
    !found.is_empty()
}

/// A where-predicate to add for a field type.
pub(crate) struct FieldBound {
    pub(crate) ty: syn::Type,
    pub(crate) bound: TokenStream,
}

/// Collects `ty: bound` for `ty` if it mentions a type parameter.
pub(crate) fn push_field_bound(
    bounds: &mut Vec<FieldBound>,
    generics: &syn::Generics,
    ty: &syn::Type,
    bound: TokenStream,
) {
    if mentions_generics(ty, generics) {
        bounds.push(FieldBound {
            ty: ty.clone(),
            bound,
        });
    }
}

/// Adds the collected predicates to the where clause of `generics`.
pub(crate) fn add_field_bounds(mut generics: syn::Generics, bounds: &[FieldBound]) -> syn::Generics {
    if bounds.is_empty() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for FieldBound { ty, bound } in bounds {
        where_clause.predicates.push(parse_quote!(#ty: #bound));
    }
    generics
}
