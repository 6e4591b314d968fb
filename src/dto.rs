use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound relay payload. Only JSON objects are accepted; absent or `null`
/// fields decode as empty strings and field names match case-insensitively
/// when no exact key is present.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct TranscriptionRequest {
    pub origin: String,
    pub name: String,
    pub data: String,
}

impl TryFrom<Map<String, Value>> for TranscriptionRequest {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            origin: take_string(&mut fields, "origin")?,
            name: take_string(&mut fields, "name")?,
            data: take_string(&mut fields, "data")?,
        })
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Result<String, String> {
    let value = match fields.remove(key) {
        Some(value) => Some(value),
        None => {
            let folded = fields
                .keys()
                .find(|candidate| candidate.eq_ignore_ascii_case(key))
                .cloned();
            folded.and_then(|folded| fields.remove(&folded))
        }
    };

    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(format!("field `{key}` must be a string, got {other}")),
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TranscriptionResult {
    pub transcription: String,
}

#[derive(Debug, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
