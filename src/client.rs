use anyhow::{Result, anyhow};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::CONTENT_TYPE;
use std::path::Path;

use crate::config::ClientConfig;
use crate::dto::{TranscriptionRequest, TranscriptionResult};

pub async fn send_transcription_request(config: &ClientConfig) -> Result<String> {
    let client = reqwest::Client::new();

    if !Path::new(&config.audio_file).exists() {
        return Err(anyhow!("Audio file not found: {}", config.audio_file));
    }

    let audio_data = tokio::fs::read(&config.audio_file)
        .await
        .map_err(|e| anyhow!("Failed to read audio file: {}", e))?;

    println!(
        "📁 Audio source: file: {} ({} bytes)",
        config.audio_file,
        audio_data.len()
    );

    let request = TranscriptionRequest {
        origin: config.origin.clone(),
        name: config.file_name(),
        data: STANDARD.encode(&audio_data),
    };
    let body = serde_json::to_vec(&request)?;

    println!(
        "🚀 Sending transcription request to: {}/transcribe",
        config.server_url
    );

    let response = client
        .post(format!("{}/transcribe", config.server_url))
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| anyhow!("Failed to send request: {}", e))?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .map_err(|e| anyhow!("Failed to read response: {}", e))?;

    if !status.is_success() {
        return Err(anyhow!(
            "Server returned error {}: {}",
            status,
            response_text
        ));
    }

    let result: TranscriptionResult = serde_json::from_str(&response_text)
        .map_err(|e| anyhow!("Failed to parse JSON response: {}", e))?;

    Ok(result.transcription)
}

pub async fn check_server_health(server_url: &str) -> Result<()> {
    let client = reqwest::Client::new();

    println!("🔍 Checking server health at: {server_url}/health");

    let response = client
        .get(format!("{server_url}/health"))
        .send()
        .await
        .map_err(|e| anyhow!("Failed to connect to server: {}", e))?;

    if response.status().is_success() {
        println!("✅ Server is healthy");
        Ok(())
    } else {
        Err(anyhow!("Server health check failed: {}", response.status()))
    }
}

pub async fn run_client(config: ClientConfig) -> Result<()> {
    println!("🎵 Resono Client");
    println!("================");
    println!("📁 File Mode: {}", config.audio_file);
    println!();

    if let Err(e) = check_server_health(&config.server_url).await {
        eprintln!("❌ {e}");
        eprintln!("💡 Make sure the relay is running: resono serve");
        return Err(e);
    }

    match send_transcription_request(&config).await {
        Ok(transcription) => {
            println!("\n✅ Transcription completed!");
            println!("📝 Result:");
            println!("{transcription}");
        }
        Err(e) => {
            eprintln!("❌ Transcription failed: {e}");
            return Err(e);
        }
    }

    Ok(())
}
