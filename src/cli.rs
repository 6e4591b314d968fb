use clap::{Parser, Subcommand};

use crate::groq::config::GROQ_API_URL;

#[derive(Parser)]
#[command(
    name = "resono",
    about = "Resono - Speech-to-text relay",
    long_about = "An HTTP relay that accepts base64-encoded audio as JSON, forwards it to the Groq transcription API and returns the transcript.",
    after_help = "EXAMPLES:\n    # Start the relay (reads PORT and GROQ_API_KEY from the environment)\n    resono serve\n\n    # Start the relay on a custom port\n    resono serve --port 9000\n\n    # Transcribe a local file through a running relay\n    resono file my_audio.wav\n\n    # Use a different relay\n    resono file audio.m4a --server-url http://my-server:8080"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(name = "serve")]
    Serve {
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        #[arg(long, env = "PORT", default_value = "8080")]
        port: u16,

        #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        #[arg(long, env = "GROQ_API_URL", default_value = GROQ_API_URL)]
        endpoint: String,

        #[arg(
            long,
            env = "GROQ_TIMEOUT_SECS",
            default_value = "60",
            value_parser = validate_timeout
        )]
        timeout_secs: u64,
    },
    #[command(name = "file")]
    TranscribeFile {
        audio_file: String,

        #[arg(long, default_value = "http://localhost:8080")]
        server_url: String,

        #[arg(long, default_value = "resono-cli")]
        origin: String,
    },
}

pub fn validate_timeout(s: &str) -> Result<u64, String> {
    match s.parse::<u64>() {
        Ok(0) => Err("Timeout must be at least 1 second".to_string()),
        Ok(secs) => Ok(secs),
        Err(_) => Err("Invalid timeout value".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from([
            "resono",
            "serve",
            "--port",
            "9000",
            "--api-key",
            "gsk_test",
            "--timeout-secs",
            "15",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve {
                port,
                api_key,
                timeout_secs,
                ..
            } => {
                assert_eq!(port, 9000);
                assert_eq!(api_key.as_deref(), Some("gsk_test"));
                assert_eq!(timeout_secs, 15);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn parses_file_mode() {
        let cli = Cli::try_parse_from(["resono", "file", "clip.wav", "--origin", "tests"]).unwrap();

        match cli.command {
            Commands::TranscribeFile {
                audio_file,
                server_url,
                origin,
            } => {
                assert_eq!(audio_file, "clip.wav");
                assert_eq!(server_url, "http://localhost:8080");
                assert_eq!(origin, "tests");
            }
            _ => panic!("expected file"),
        }
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(validate_timeout("0").is_err());
        assert!(validate_timeout("abc").is_err());
        assert_eq!(validate_timeout("30"), Ok(30));
    }
}
