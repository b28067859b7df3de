//! Wordforge server binary.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordforge_cache::CacheConfig;
use wordforge_error::ConfigError;
use wordforge_interface::{DictionaryLookup, TextGenerator};
use wordforge_models::{OpenAiClient, WordsApiClient};
use wordforge_server::AppState;

#[derive(Parser)]
#[command(name = "wordforge")]
#[command(about = "Wordforge - vocabulary backend over dictionary and chat APIs")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3001, env = "PORT")]
        port: u16,

        /// Vocabulary cache TTL in seconds
        #[arg(long, default_value_t = 600)]
        cache_ttl: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Serve {
            host,
            port,
            cache_ttl,
        } => {
            info!("Starting Wordforge server");

            let generator = OpenAiClient::from_env()?;
            info!(model = generator.model_name(), "Chat provider configured");

            let dictionary = WordsApiClient::from_env()?;
            info!(
                provider = dictionary.provider_name(),
                "Dictionary provider configured"
            );

            let cache_config = CacheConfig::default().with_default_ttl(cache_ttl);
            let state = AppState::new(Arc::new(generator), Arc::new(dictionary), cache_config);

            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .map_err(|e| ConfigError::new(format!("invalid listen address: {e}")))?;
            wordforge_server::serve(addr, state).await?;
        }
    }

    Ok(())
}
