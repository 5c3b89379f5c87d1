//! Type inspection helpers for the derive macro.

use syn::{PathArguments, Type};

/// Returns `true` for `PhantomData<..>` under any path (`PhantomData`,
/// `core::marker::PhantomData`, ...).
///
/// Marker fields hold no data: the walk and the masked `Debug` leave them
/// out, and their type parameters get no bounds.
pub(crate) fn is_phantom_data(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    type_path.path.segments.last().is_some_and(|segment| {
        segment.ident == "PhantomData"
            && matches!(segment.arguments, PathArguments::AngleBracketed(_))
    })
}
