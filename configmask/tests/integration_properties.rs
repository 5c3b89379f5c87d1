//! Property-based tests for masking and duration encoding.

use std::time::Duration as StdDuration;

use configmask::{
    Duration, MASKED_JSON_PLACEHOLDER, MASKED_PLACEHOLDER, Masked, to_masked_json, to_safe_map,
};
use proptest::prelude::*;

#[derive(Masked)]
struct Credentials {
    user: String,
    #[sensitive]
    password: String,
}

#[derive(Masked)]
struct Service {
    name: String,
    #[sensitive]
    token: String,
    credentials: Credentials,
    replicas: u32,
}

fn secret() -> impl Strategy<Value = String> {
    "SECRET-[A-Za-z0-9@:/%]{4,24}"
}

fn visible() -> impl Strategy<Value = String> {
    "[a-z]{0,12}"
}

proptest! {
    /// Sensitive values never appear in either output.
    #[test]
    fn sensitive_values_never_leak(
        name in visible(),
        user in visible(),
        token in secret(),
        password in secret(),
        replicas in any::<u32>(),
    ) {
        let service = Service {
            name,
            token: token.clone(),
            credentials: Credentials { user, password: password.clone() },
            replicas,
        };

        let json = to_masked_json(&service).unwrap();
        let map = to_safe_map(&service).to_string();
        let debug = format!("{service:?}");
        for output in [&json, &map, &debug] {
            prop_assert!(!output.contains(&token));
            prop_assert!(!output.contains(&password));
        }

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&value["token"], MASKED_JSON_PLACEHOLDER);
        prop_assert_eq!(&value["credentials"]["password"], MASKED_JSON_PLACEHOLDER);
    }

    /// Non-sensitive values appear verbatim; empty ones are absent.
    #[test]
    fn visible_values_are_kept_verbatim(
        name in visible(),
        user in visible(),
        token in secret(),
    ) {
        let service = Service {
            name: name.clone(),
            token,
            credentials: Credentials { user: user.clone(), password: String::new() },
            replicas: 1,
        };
        let map = to_safe_map(&service);

        prop_assert_eq!(map.text("name"), (!name.is_empty()).then_some(name.as_str()));
        prop_assert_eq!(map.text("token"), Some(MASKED_PLACEHOLDER));
        match map.map("credentials") {
            Some(credentials) => {
                prop_assert_eq!(credentials.text("user"), Some(user.as_str()));
                prop_assert!(!credentials.contains_key("password"));
            }
            None => prop_assert!(user.is_empty()),
        }
    }

    /// Duration text round trips to the identical value.
    #[test]
    fn duration_text_round_trips(secs in 0u64..10_000_000, nanos in 0u32..1_000_000_000) {
        let duration = Duration::new(StdDuration::new(secs, nanos));
        let text = duration.to_string();
        prop_assert_eq!(text.parse::<Duration>().unwrap(), duration);

        let json = serde_json::to_string(&duration).unwrap();
        prop_assert_eq!(serde_json::from_str::<Duration>(&json).unwrap(), duration);
    }

    /// Parsing never panics, whatever the input.
    #[test]
    fn duration_parse_is_total(input in "\\PC{0,16}") {
        let _ = input.parse::<Duration>();
    }
}

#[cfg(feature = "secrets")]
mod resolver {
    use configmask::{MemoryFetcher, SecretResolver};
    use proptest::prelude::*;

    proptest! {
        /// Values with a `postgres*` scheme are returned unchanged.
        #[test]
        fn postgres_literals_pass_through(
            suffix in "(ql)?",
            user in "[a-z]{1,8}",
            host in "[a-z]{1,12}",
            port in 1u16..,
            db in "[a-z]{1,8}",
        ) {
            let value = format!("postgres{suffix}://{user}@{host}:{port}/{db}");
            let resolver = SecretResolver::new(MemoryFetcher::new());
            prop_assert_eq!(resolver.resolve(&value).unwrap(), value.as_str());
        }

        /// libpq multi-host lists (and out-of-range ports) are not validated.
        #[test]
        fn multi_host_literals_pass_through(
            hosts in proptest::collection::vec(("[a-z]{1,12}", 0u32..100_000), 1..4),
            db in "[a-z]{1,8}",
        ) {
            let hosts: Vec<String> = hosts
                .iter()
                .map(|(host, port)| format!("{host}:{port}"))
                .collect();
            let value = format!("postgres://u:p@{}/{db}?target_session_attrs=any", hosts.join(","));
            let resolver = SecretResolver::new(MemoryFetcher::new());
            prop_assert_eq!(resolver.resolve(&value).unwrap(), value.as_str());
        }
    }
}
