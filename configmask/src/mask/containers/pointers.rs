//! Delegating `MaskField` implementations for references, smart pointers and
//! `Option`.

use std::{rc::Rc, sync::Arc};

use crate::mask::{
    error::BoxError,
    traits::{MaskField, Maskable},
};

macro_rules! impl_mask_field_deref {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T> MaskField for $ptr
            where
                T: MaskField + ?Sized,
            {
                fn display_value(&self) -> String {
                    (**self).display_value()
                }

                fn as_record(&self) -> Option<&dyn Maskable> {
                    (**self).as_record()
                }

                fn encode_json(&self) -> Option<Result<String, BoxError>> {
                    (**self).encode_json()
                }

                fn encode_text(&self) -> Option<String> {
                    (**self).encode_text()
                }

                fn encode_masked(&self) -> Option<Result<String, BoxError>> {
                    (**self).encode_masked()
                }
            }
        )+
    };
}

impl_mask_field_deref!(&T, Box<T>, Rc<T>, Arc<T>);

/// `None` is absent from the safe map and encodes as `null`.
impl<T> MaskField for Option<T>
where
    T: MaskField,
{
    fn display_value(&self) -> String {
        self.as_ref().map(MaskField::display_value).unwrap_or_default()
    }

    fn as_record(&self) -> Option<&dyn Maskable> {
        self.as_ref().and_then(MaskField::as_record)
    }

    fn encode_json(&self) -> Option<Result<String, BoxError>> {
        match self {
            Some(value) => value.encode_json(),
            None => Some(Ok("null".to_owned())),
        }
    }

    fn encode_text(&self) -> Option<String> {
        self.as_ref().and_then(MaskField::encode_text)
    }

    fn encode_masked(&self) -> Option<Result<String, BoxError>> {
        self.as_ref().and_then(MaskField::encode_masked)
    }
}
