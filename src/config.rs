use std::path::Path;

use crate::groq::config::GroqConfig;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub groq: GroqConfig,
}

#[derive(Debug)]
pub struct ClientConfig {
    pub server_url: String,
    pub audio_file: String,
    pub origin: String,
}

impl ClientConfig {
    pub fn new(server_url: String, audio_file: String, origin: String) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            audio_file,
            origin,
        }
    }

    /// Name sent to the relay: the file name without its directory.
    pub fn file_name(&self) -> String {
        Path::new(&self.audio_file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.audio_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directories_and_trailing_slash() {
        let config = ClientConfig::new(
            "http://localhost:8080/".to_string(),
            "samples/meeting.ogg".to_string(),
            "cli".to_string(),
        );
        assert_eq!(config.server_url, "http://localhost:8080");
        assert_eq!(config.file_name(), "meeting.ogg");
    }
}
