use std::fmt;

use configmask::{MaskDisplay, Masked, to_masked_json};

#[derive(Debug, MaskDisplay)]
enum Level {
    Debug,
    Info,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => f.write_str("debug"),
            Self::Info => f.write_str("info"),
        }
    }
}

#[derive(Debug, MaskDisplay)]
struct Tagged<T>(T);

impl<T: fmt::Display> fmt::Display for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag:{}", self.0)
    }
}

#[derive(Masked)]
struct Logging {
    level: Level,
    fallback: Option<Level>,
    tag: Tagged<u8>,
}

fn main() {
    let logging = Logging {
        level: Level::Info,
        fallback: Some(Level::Debug),
        tag: Tagged(1),
    };
    let _ = to_masked_json(&logging);
}
