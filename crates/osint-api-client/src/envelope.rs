//! Response body of the command endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top-level JSON object returned by the API.
///
/// `responses` are usually strings holding fenced JSON; other JSON values are kept as-is so the
/// formatter can render them directly. Missing or `null` fields mean "no data".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: Vec<Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiEnvelope {
    /// Envelope reporting success with the given string responses.
    pub fn ok<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            success: true,
            responses: responses
                .into_iter()
                .map(|s| Value::String(s.into()))
                .collect(),
        }
    }

    /// Envelope reporting no data.
    pub fn no_data() -> Self {
        Self::default()
    }
}
