//! MongoDB client and index management.

use mongodb::{
    Client, Collection, IndexModel,
    bson::doc,
    options::{ClientOptions, IndexOptions},
};
use tracing::{debug, info};

use super::{
    IDEAS_COLLECTION,
    idea::{IdeaDocument, MongoIdeaRepository},
};
use crate::db::{Database, DbError, DbResult};

/// MongoDB database implementation.
///
/// Owns one pooled client for the lifetime of the process; repositories
/// borrow typed collection handles from it.
#[derive(Clone)]
pub struct MongoDatabase {
    client: Client,
    database: mongodb::Database,
}

impl MongoDatabase {
    /// Build a client for `uri` and select `database_name`.
    ///
    /// The driver connects lazily; use [`Database::ping`] to verify the
    /// server is reachable.
    pub async fn connect(uri: &str, database_name: &str) -> DbResult<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        options.app_name = Some("ideas-api".to_string());

        let client = Client::with_options(options).map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;
        debug!(database = database_name, "MongoDB client created");

        let database = client.database(database_name);
        Ok(Self { client, database })
    }

    fn collection(&self) -> Collection<IdeaDocument> {
        self.database.collection::<IdeaDocument>(IDEAS_COLLECTION)
    }
}

impl Database for MongoDatabase {
    type Ideas<'a> = MongoIdeaRepository;

    async fn migrate(&self) -> DbResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection()
            .create_index(index)
            .await
            .map_err(|e| DbError::Database {
                message: format!("Failed to create unique index on 'id': {}", e),
            })?;

        info!(collection = IDEAS_COLLECTION, "Ensured unique index on id");
        Ok(())
    }

    async fn ping(&self) -> DbResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DbError::Connection {
                message: format!("Health check failed: {}", e),
            })?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client shut down");
    }

    fn ideas(&self) -> Self::Ideas<'_> {
        MongoIdeaRepository {
            collection: self.collection(),
        }
    }
}
