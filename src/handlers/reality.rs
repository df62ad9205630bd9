/// Reality show statistics and voting endpoints
use actix_web::{web, HttpResponse};
use futures::stream::TryStreamExt;
use mongodb::{bson::doc, Database};
use serde_json::json;

use crate::db::reality_collection;
use crate::error::ApiError;
use crate::models::{
    AudienciaEmissora, IdadeInfo, MessageResponse, RealityPremios, RealityPremiosFiltrados,
    RealityVotos, TotalPremios,
};
use crate::services::pipelines;
use crate::utils::parse_prize_value;

pub const ROUTES: &[&str] = &[
    "/premios",
    "/idade/:nome_reality",
    "/maior/:valor",
    "/total",
    "/audiencia",
    "/votar/:realityNome/:participanteNome (PATCH)",
    "/votos/:realityNome",
];

/// GET /api
pub async fn api_index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Bem-vindo à API do Reality Show!",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "rotas_disponiveis": ROUTES,
    }))
}

/// Every show with its participants' names, ages and prizes
/// GET /api/premios
pub async fn list_prizes(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    const CONTEXT: &str = "Erro ao buscar dados dos prêmios";

    let shows: Vec<RealityPremios> = reality_collection(&db)
        .clone_with_type::<RealityPremios>()
        .find(doc! {})
        .projection(pipelines::prizes_projection())
        .await
        .map_err(ApiError::database(CONTEXT))?
        .try_collect()
        .await
        .map_err(ApiError::database(CONTEXT))?;

    Ok(HttpResponse::Ok().json(shows))
}

/// Youngest and oldest participant of a show
/// GET /api/idade/{nome_reality}
pub async fn age_extremes(
    db: web::Data<Database>,
    nome_reality: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    const CONTEXT: &str = "Erro ao buscar informações de idade";

    let mut cursor = reality_collection(&db)
        .aggregate(pipelines::age_extremes_pipeline(&nome_reality))
        .with_type::<IdadeInfo>()
        .await
        .map_err(ApiError::database(CONTEXT))?;

    match cursor.try_next().await.map_err(ApiError::database(CONTEXT))? {
        Some(info) => Ok(HttpResponse::Ok().json(info)),
        None => Err(ApiError::NotFound("Reality show não encontrado.")),
    }
}

/// Prizes worth at least `valor`, grouped by show and participant
/// GET /api/maior/{valor}
pub async fn prizes_at_least(
    db: web::Data<Database>,
    valor: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    const CONTEXT: &str = "Erro ao buscar prêmios por valor";

    let valor_minimo = parse_prize_value(&valor)?;

    let shows: Vec<RealityPremiosFiltrados> = reality_collection(&db)
        .aggregate(pipelines::prizes_at_least_pipeline(valor_minimo))
        .with_type::<RealityPremiosFiltrados>()
        .await
        .map_err(ApiError::database(CONTEXT))?
        .try_collect()
        .await
        .map_err(ApiError::database(CONTEXT))?;

    Ok(HttpResponse::Ok().json(shows))
}

/// Prize count per show and overall
/// GET /api/total
pub async fn prize_totals(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    const CONTEXT: &str = "Erro ao calcular total de prêmios";

    let mut cursor = reality_collection(&db)
        .aggregate(pipelines::prize_totals_pipeline())
        .with_type::<TotalPremios>()
        .await
        .map_err(ApiError::database(CONTEXT))?;

    // $facet always yields one document, unless the collection is empty
    let totals = cursor
        .try_next()
        .await
        .map_err(ApiError::database(CONTEXT))?
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(totals))
}

/// Audience points summed per broadcaster
/// GET /api/audiencia
pub async fn audience_by_broadcaster(
    db: web::Data<Database>,
) -> Result<HttpResponse, ApiError> {
    const CONTEXT: &str = "Erro ao calcular audiência";

    let totals: Vec<AudienciaEmissora> = reality_collection(&db)
        .aggregate(pipelines::audience_pipeline())
        .with_type::<AudienciaEmissora>()
        .await
        .map_err(ApiError::database(CONTEXT))?
        .try_collect()
        .await
        .map_err(ApiError::database(CONTEXT))?;

    Ok(HttpResponse::Ok().json(totals))
}

/// Cast one vote for a participant
/// PATCH /api/votar/{realityNome}/{participanteNome}
pub async fn cast_vote(
    db: web::Data<Database>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (reality_nome, participante_nome) = path.into_inner();

    let result = reality_collection(&db)
        .update_one(
            pipelines::vote_filter(&reality_nome, &participante_nome),
            pipelines::vote_update(),
        )
        .await
        .map_err(ApiError::database("Erro ao computar voto"))?;

    if result.modified_count == 0 {
        return Err(ApiError::NotFound("Reality show ou participante não encontrado."));
    }

    log::debug!("Voto computado para {} em {}", participante_nome, reality_nome);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Voto computado com sucesso!".to_string(),
    }))
}

/// Vote counters of every participant in a show
/// GET /api/votos/{realityNome}
pub async fn get_votes(
    db: web::Data<Database>,
    reality_nome: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let reality = reality_collection(&db)
        .clone_with_type::<RealityVotos>()
        .find_one(pipelines::reality_filter(&reality_nome))
        .projection(pipelines::votes_projection())
        .await
        .map_err(ApiError::database("Erro ao buscar votos"))?;

    match reality.and_then(|r| r.participantes) {
        Some(participantes) => Ok(HttpResponse::Ok().json(participantes)),
        None => Err(ApiError::NotFound(
            "Reality show não encontrado ou sem participantes.",
        )),
    }
}
