use std::{collections::BTreeMap, net::SocketAddr};

use configmask::{Masked, to_masked_json};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Limits {
    burst: u32,
}

/// Implements neither `MaskField`, `Debug` nor `Serialize`.
struct Handle;

#[derive(Masked, Serialize)]
struct Server {
    #[mask(display)]
    listen: SocketAddr,
    #[mask(json)]
    limits: Limits,
    #[mask(json, rename = "headerMap")]
    headers: BTreeMap<String, String>,
    #[serde(rename = "tlsKey")]
    #[mask(sensitive)]
    tls_key: String,
    #[mask(skip)]
    #[serde(skip)]
    handle: Handle,
}

#[derive(Masked)]
struct Pair(String, #[sensitive] String);

#[derive(Masked)]
struct Marker;

#[derive(Masked)]
#[mask(skip_debug)]
struct NoDebug {
    value: u8,
}

fn main() {
    let server = Server {
        listen: "127.0.0.1:8080".parse().unwrap(),
        limits: Limits { burst: 10 },
        headers: BTreeMap::new(),
        tls_key: "key".into(),
        handle: Handle,
    };
    let _ = to_masked_json(&server);
    let _ = format!("{server:?}");
    let _ = to_masked_json(&Pair("a".into(), "b".into()));
    let _ = to_masked_json(&Marker);
    let _ = to_masked_json(&NoDebug { value: 1 });
}
