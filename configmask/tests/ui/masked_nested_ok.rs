use configmask::{Masked, to_masked_json, to_safe_map};

#[derive(Masked)]
struct Database {
    host: String,
    port: u16,
    #[sensitive]
    password: String,
}

#[derive(Masked)]
struct Config {
    name: String,
    database: Database,
    replicas: Vec<Database>,
    fallback: Option<Box<Database>>,
}

fn main() {
    let config = Config {
        name: "api".into(),
        database: Database {
            host: "db".into(),
            port: 5432,
            password: "pw".into(),
        },
        replicas: Vec::new(),
        fallback: None,
    };
    let _ = to_safe_map(&config);
    let _ = to_masked_json(&config);
    let _ = format!("{config:?}");
}
