//! Serde adapter for optional secret strings.
//!
//! Stored passwords keep their plain JSON shape: a string, or `null` when
//! absent.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes the exposed text, or `null`
#[allow(clippy::ref_option)]
pub fn serialize<S>(value: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value
        .as_ref()
        .map(ExposeSecret::expose_secret)
        .serialize(serializer)
}

/// Deserializes a string, or `null`, into a secret
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}
