use actix_files::Files;
use actix_web::web;
use std::path::PathBuf;

use crate::handlers;

/// REST API, mounted under `/api`
pub fn api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("", web::get().to(handlers::api_index))
            .route("/", web::get().to(handlers::api_index))
            .route("/premios", web::get().to(handlers::list_prizes))
            .route("/idade/{nome_reality}", web::get().to(handlers::age_extremes))
            .route("/maior/{valor}", web::get().to(handlers::prizes_at_least))
            .route("/total", web::get().to(handlers::prize_totals))
            .route("/audiencia", web::get().to(handlers::audience_by_broadcaster))
            .route(
                "/votar/{realityNome}/{participanteNome}",
                web::patch().to(handlers::cast_vote),
            )
            .route("/votos/{realityNome}", web::get().to(handlers::get_votes)),
    );
}

/// Health probe plus the static client, with `index.html` served at `/`.
/// Register after [`api`]: the file service matches every remaining path.
pub fn frontend(static_dir: impl Into<PathBuf>) -> impl FnOnce(&mut web::ServiceConfig) {
    let static_dir = static_dir.into();
    move |cfg| {
        cfg.route("/health", web::get().to(handlers::health))
            .service(Files::new("/", static_dir).index_file("index.html"));
    }
}
