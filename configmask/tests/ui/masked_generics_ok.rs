use std::{fmt, marker::PhantomData};

use configmask::{Masked, to_masked_json, to_safe_map};

/// `T` carries no bounds of its own: only the fields that mention it do.
#[derive(Masked)]
struct Pool<T, B, M> {
    name: String,
    limits: Vec<T>,
    #[mask(display)]
    backend: B,
    _marker: PhantomData<M>,
}

struct Postgres;

impl fmt::Display for Postgres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("postgres")
    }
}

impl fmt::Debug for Postgres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Postgres")
    }
}

/// Implements neither `MaskField` nor `Debug`.
struct Opaque;

#[derive(Masked)]
struct Borrowed<'a> {
    name: &'a str,
    #[sensitive]
    secret: &'a str,
}

fn main() {
    let pool: Pool<u32, Postgres, Opaque> = Pool {
        name: "primary".into(),
        limits: vec![1, 2],
        backend: Postgres,
        _marker: PhantomData,
    };
    let _ = to_safe_map(&pool);
    let _ = to_masked_json(&pool);
    let _ = format!("{pool:?}");

    let borrowed = Borrowed {
        name: "x",
        secret: "y",
    };
    let _ = to_safe_map(&borrowed);
}
