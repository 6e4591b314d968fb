mod cli;
mod client;
mod config;
mod dto;
mod error;
mod groq;
mod server;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{ClientConfig, ServerConfig};
use groq::config::GroqConfig;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            api_key,
            endpoint,
            timeout_secs,
        } => {
            let groq = GroqConfig::new(api_key, endpoint, Duration::from_secs(timeout_secs));
            server::run_server(ServerConfig { host, port, groq }).await
        }
        Commands::TranscribeFile {
            audio_file,
            server_url,
            origin,
        } => {
            let config = ClientConfig::new(server_url, audio_file, origin);
            client::run_client(config).await
        }
    }
}
