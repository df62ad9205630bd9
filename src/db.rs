use mongodb::{Client, Collection, Database};

use crate::config::AppConfig;
use crate::models::RealityShow;

pub const REALITY_COLLECTION: &str = "reality_shows";
pub const FALLBACK_DATABASE: &str = "reality_shows";

pub async fn init_db(config: &AppConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.mongo_uri).await?;

    // Ping the database to verify connection
    client
        .database("admin")
        .run_command(mongodb::bson::doc! {"ping": 1})
        .await?;

    log::info!("Conectado ao MongoDB!");

    Ok(select_database(&client, config))
}

/// `DATABASE_NAME` wins, then the database named in the URI.
pub fn select_database(client: &Client, config: &AppConfig) -> Database {
    match &config.database_name {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(FALLBACK_DATABASE)),
    }
}

pub fn reality_collection(db: &Database) -> Collection<RealityShow> {
    db.collection::<RealityShow>(REALITY_COLLECTION)
}
