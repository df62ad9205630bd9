// Import from library crate
use server::{config::AppConfig, db, routes};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Não foi possível iniciar o servidor: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize database
    let db = match db::init_db(&config).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("Erro ao conectar ao MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("🚀 Servidor rodando em http://{}:{}", config.host, config.port);
    log::info!("📁 Static files: {}", config.static_dir);

    match &config.cors_origins {
        Some(origins) => log::info!("🔒 CORS allowed origins: {:?}", origins),
        None => log::info!("🔓 CORS: any origin"),
    }

    let bind = (config.host.clone(), config.port);

    HttpServer::new(move || {
        let cors = match &config.cors_origins {
            Some(origins) => origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
            None => Cors::default().allow_any_origin(),
        }
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .app_data(web::Data::new(db.clone()))
            .configure(routes::api)
            .configure(routes::frontend(config.static_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
