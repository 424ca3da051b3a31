//! Ideas API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;

use clap::Parser;
use ideas::api::{self, ApiError};
use ideas::config::{Config, ConfigError, StoreKind};
use ideas::db::{Database, DbError, MemoryDatabase, MongoDatabase};
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(ideas::binary::config))]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    #[diagnostic(code(ideas::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(ideas::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "ideas-api")]
#[command(author, version, about = "Ideas API server", long_about = None)]
struct Cli {
    /// Host address to bind to (overrides HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides PORT; defaults to 8080)
    #[arg(short, long)]
    port: Option<u16>,

    /// Idea store backend (overrides IDEAS_STORE)
    #[arg(long, value_enum)]
    store: Option<StoreKind>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(store) = self.store {
            config = config.with_store(store);
        }
        config
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Optional .env
    let _ = dotenvy::dotenv();
    api::init_tracing();

    serve(Cli::parse()).await?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    let config = cli.apply(Config::from_env()?);
    info!(?config, "Configuration loaded");

    match config.store {
        StoreKind::Mongo => {
            let db = MongoDatabase::connect(&config.mongodb_uri, &config.mongodb_dbname).await?;

            // Fail fast when the server is unreachable
            db.ping().await?;
            db.migrate().await?;
            info!(database = %config.mongodb_dbname, "MongoDB ready");

            api::run(&config, db).await?;
        }
        StoreKind::Memory => {
            info!("Using in-memory idea store; data is lost on exit");
            api::run(&config, MemoryDatabase::new()).await?;
        }
    }

    Ok(())
}
