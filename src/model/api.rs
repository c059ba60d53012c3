use serde::{Deserialize, Deserializer, Serialize};

/// Body returned by create, update and delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResult {
    pub success: bool,
    /// Identifier of the created row, only present for creations.
    #[serde(default)]
    pub id: Option<i64>,
}

/// Deserialize a monetary or measured value sent either as a JSON number or as the
/// decimal string the backend produces for `DECIMAL` columns.
pub fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(value) => Ok(value),
        Amount::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
