//! Database connection secrets in the RDS rotation format.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;

use crate::Masked;

/// Characters escaped in the user, password and database name components of
/// a connection string.
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Database connection details as stored by RDS for password rotation.
///
/// `Debug` masks the password.
#[derive(Clone, PartialEq, Eq, Deserialize, Masked)]
pub struct RdsSecret {
    pub host: String,
    pub port: u16,
    pub engine: String,
    pub dbname: String,
    pub username: String,
    #[sensitive]
    pub password: String,
}

impl RdsSecret {
    /// Decodes a fetched secret.
    ///
    /// # Errors
    ///
    /// Fails if `bytes` is not a JSON object with the expected fields.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Builds `{engine}://{username}:{password}@{host}:{port}/{dbname}`.
    ///
    /// User, password and database name are percent-encoded, so reserved
    /// characters in a rotated password cannot corrupt the URL.
    #[must_use]
    pub fn connection_string(&self) -> String {
        format!(
            "{}://{}:{}@{}:{}/{}",
            self.engine,
            utf8_percent_encode(&self.username, COMPONENT),
            utf8_percent_encode(&self.password, COMPONENT),
            self.host,
            self.port,
            utf8_percent_encode(&self.dbname, COMPONENT),
        )
    }
}
