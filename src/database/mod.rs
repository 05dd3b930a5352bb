pub mod users;

#[cfg(test)]
pub mod memory;

pub use users::{MongoUserRepository, UserRepository, USERS_COLLECTION};

use mongodb::{Client, Collection, Database};
use std::error::Error;
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes the service relies on.
    ///
    /// The unique `users(email)` index is what keeps emails unique; inserts
    /// and updates that would duplicate one fail with a duplicate-key error.
    /// Startup fails when it cannot be built, e.g. over existing duplicates.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self.collection::<mongodb::bson::Document>(USERS_COLLECTION);

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("users_email_unique".to_string())
                    .build(),
            )
            .build();

        // Sem o índice nada impede emails duplicados, então não sobe sem ele
        users.create_index(email_index).await.map_err(|e| {
            log::error!("   ❌ Could not create unique index on users(email): {}", e);
            e
        })?;
        log::info!("   ✅ Index created: users(email) unique");

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
