// Common test utilities for server integration tests

use std::env;
use std::time::Duration;

use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Get MongoDB URL from environment or use default
/// Uses MONGO_URI from .env, then MONGODB_PORT on localhost
pub fn get_mongodb_url() -> String {
    env::var("MONGO_URI").unwrap_or_else(|_| {
        let port = env::var("MONGODB_PORT").unwrap_or_else(|_| "27017".to_string());
        format!("mongodb://localhost:{}", port)
    })
}

/// Client that never touches the network until a query runs
pub async fn lazy_database() -> Database {
    Client::with_uri_str("mongodb://localhost:27017")
        .await
        .expect("valid connection string")
        .database("reality_test_lazy")
}

/// Connect to a fresh, uniquely named database, or `None` when MongoDB is
/// not reachable.
pub async fn try_test_database(tag: &str) -> Option<Database> {
    let url = get_mongodb_url();
    let mut options = match ClientOptions::parse(&url).await {
        Ok(options) => options,
        Err(e) => {
            println!("⚠️  Invalid MongoDB URL {}: {}", url, e);
            return None;
        }
    };
    options.server_selection_timeout = Some(Duration::from_secs(2));

    let client = Client::with_options(options).ok()?;
    if let Err(e) = client.database("admin").run_command(doc! { "ping": 1 }).await {
        println!("⚠️  MongoDB not available at {}: {}", url, e);
        println!("   Skipping database-backed test");
        return None;
    }

    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let name = format!("reality_test_{}_{}_{}", tag, std::process::id(), nanos);
    Some(client.database(&name))
}

/// Five shows, covering missing counters, missing prize arrays, extra prize
/// fields, names with regex metacharacters, and an empty and a missing
/// participant list.
pub fn fixtures() -> Vec<Document> {
    vec![
        doc! {
            "nome": "Big Brother Brasil",
            "emissora": "Globo",
            "audiencia_pontos": 30,
            "participantes": [
                {
                    "nome": "Ana",
                    "idade": 25,
                    "premios_ganhos": [
                        { "valor": 1000 },
                        { "valor": 5000.0, "descricao": "Carro" }
                    ]
                },
                { "nome": "Bruno", "idade": 31, "premios_ganhos": [{ "valor": 200 }] },
                { "nome": "Carla", "idade": 22 }
            ]
        },
        doc! {
            "nome": "A Fazenda (2024)",
            "emissora": "Record",
            "audiencia_pontos": 12,
            "participantes": [
                { "nome": "Diego", "idade": 40, "premios_ganhos": [{ "valor": 1500 }] },
                { "nome": "Elisa", "idade": 35, "total_votos": 3, "premios_ganhos": [] }
            ]
        },
        doc! {
            "nome": "No Limite",
            "emissora": "Globo",
            "audiencia_pontos": 8,
            "participantes": [
                { "nome": "Fabio", "idade": 28, "premios_ganhos": [] }
            ]
        },
        doc! {
            "nome": "Ilha",
            "emissora": "SBT",
            "audiencia_pontos": 5,
            "participantes": []
        },
        doc! {
            "nome": "Casa Vazia",
            "emissora": "SBT"
        },
    ]
}

pub async fn seed(db: &Database) {
    db.collection::<Document>(server::db::REALITY_COLLECTION)
        .insert_many(fixtures())
        .await
        .expect("seed reality_shows");
}
