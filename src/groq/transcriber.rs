use anyhow::Result;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine, alphabet};
use log::{debug, info, warn};
use reqwest::multipart;

use crate::dto::ProviderResponse;
use crate::error::RelayError;
use crate::groq::config::{GROQ_MODEL, GroqConfig};

/// Forwards base64 audio to the Groq transcription endpoint.
#[derive(Clone)]
pub struct GroqTranscriber {
    client: reqwest::Client,
    config: GroqConfig,
}

impl GroqTranscriber {
    pub fn new(config: GroqConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    pub async fn transcribe(
        &self,
        origin: &str,
        name: &str,
        base64_data: &str,
    ) -> Result<String, RelayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RelayError::Configuration("GROQ_API_KEY is not set"))?;

        let audio_bytes = decode_audio(base64_data)?;
        info!(
            "Forwarding '{}' from origin '{}' ({} bytes) to provider",
            name,
            origin,
            audio_bytes.len()
        );

        let file_part = multipart::Part::bytes(audio_bytes).file_name(name.to_string());

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("model", GROQ_MODEL);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .await
            .map_err(RelayError::transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(RelayError::transport)?;
        let body = String::from_utf8_lossy(&body).into_owned();
        debug!("Provider answered {} with {} bytes", status, body.len());

        if !status.is_success() {
            warn!("Provider rejected transcription with {status}: {body}");
            return Err(RelayError::Provider { status, body });
        }

        Ok(interpret_success_body(body))
    }
}

/// Padded standard alphabet; non-zero trailing bits in the last symbol are tolerated.
const AUDIO_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

fn decode_audio(base64_data: &str) -> Result<Vec<u8>, RelayError> {
    // Line breaks inside the payload are ignored.
    if base64_data.contains(['\r', '\n']) {
        return Ok(AUDIO_BASE64.decode(base64_data.replace(['\r', '\n'], ""))?);
    }
    Ok(AUDIO_BASE64.decode(base64_data)?)
}

/// Structured `transcription` wins; anything else is handed back verbatim as
/// the transcript, including JSON bodies that lack the field.
fn interpret_success_body(body: String) -> String {
    match serde_json::from_str::<ProviderResponse>(&body) {
        Ok(ProviderResponse {
            transcription: Some(text),
            ..
        }) if !text.is_empty() => text,
        Ok(parsed) => {
            // TODO: drop the verbatim fallback for JSON bodies once the provider
            // contract for `{"text": ...}` responses is confirmed.
            warn!(
                "Provider returned JSON without a transcription (error: {:?}); forwarding raw body",
                parsed.error
            );
            body
        }
        Err(_) => {
            debug!("Provider body is not JSON, treating it as plain text");
            body
        }
    }
}
