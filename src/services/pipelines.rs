/// Filters, projections and aggregation pipelines run against `reality_shows`
use mongodb::bson::{doc, Document};

use crate::utils::exact_name;

/// Projection for GET /api/premios
pub fn prizes_projection() -> Document {
    doc! {
        "_id": 0,
        "nome": 1,
        "participantes.nome": 1,
        "participantes.idade": 1,
        "participantes.premios_ganhos": 1,
    }
}

/// Youngest and oldest participant of one show.
pub fn age_extremes_pipeline(reality_nome: &str) -> Vec<Document> {
    vec![
        doc! { "$match": { "nome": exact_name(reality_nome) } },
        doc! { "$unwind": "$participantes" },
        doc! { "$sort": { "participantes.idade": 1 } },
        doc! {
            "$group": {
                "_id": "$nome",
                "mais_novo": { "$first": "$participantes" },
                "mais_velho": { "$last": "$participantes" },
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "reality_show": "$_id",
                "participante_mais_novo": {
                    "nome": "$mais_novo.nome",
                    "idade": "$mais_novo.idade",
                },
                "participante_mais_velho": {
                    "nome": "$mais_velho.nome",
                    "idade": "$mais_velho.idade",
                },
            }
        },
    ]
}

/// Shows, participants and prizes restricted to prizes worth at least
/// `valor_minimo`. Participants left without prizes are dropped.
pub fn prizes_at_least_pipeline(valor_minimo: f64) -> Vec<Document> {
    vec![
        doc! { "$match": { "participantes.premios_ganhos.valor": { "$gte": valor_minimo } } },
        doc! { "$unwind": "$participantes" },
        doc! {
            "$addFields": {
                "participantes.premios_ganhos": {
                    "$filter": {
                        "input": { "$ifNull": ["$participantes.premios_ganhos", []] },
                        "as": "premio",
                        "cond": { "$gte": ["$$premio.valor", valor_minimo] },
                    }
                }
            }
        },
        doc! { "$match": { "participantes.premios_ganhos": { "$ne": [] } } },
        doc! {
            "$group": {
                "_id": "$_id",
                "nome": { "$first": "$nome" },
                "emissora": { "$first": "$emissora" },
                "participantes": { "$push": "$participantes" },
            }
        },
        doc! { "$sort": { "nome": 1 } },
        doc! {
            "$project": {
                "_id": 0,
                "nome": 1,
                "emissora": 1,
                "participantes.nome": 1,
                "participantes.premios_ganhos": 1,
            }
        },
    ]
}

/// Prize count per show plus the overall count, in a single `$facet`.
pub fn prize_totals_pipeline() -> Vec<Document> {
    vec![
        doc! { "$unwind": "$participantes" },
        doc! { "$unwind": "$participantes.premios_ganhos" },
        doc! {
            "$facet": {
                "totais_por_reality": [
                    { "$group": { "_id": "$nome", "total": { "$sum": 1 } } },
                    { "$sort": { "_id": 1 } },
                    { "$project": { "_id": 0, "reality_show": "$_id", "total_premios": "$total" } }
                ],
                "total_geral": [
                    { "$count": "soma_total" }
                ],
            }
        },
        doc! {
            "$project": {
                "totais_por_reality": "$totais_por_reality",
                "total_geral": { "$arrayElemAt": ["$total_geral.soma_total", 0] },
            }
        },
    ]
}

/// Sum of audience points per broadcaster.
pub fn audience_pipeline() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$emissora",
                "total_audiencia_pontos": { "$sum": "$audiencia_pontos" },
            }
        },
        doc! { "$sort": { "_id": 1 } },
        doc! {
            "$project": {
                "_id": 0,
                "emissora": "$_id",
                "total_audiencia": "$total_audiencia_pontos",
            }
        },
    ]
}

pub fn reality_filter(reality_nome: &str) -> Document {
    doc! { "nome": exact_name(reality_nome) }
}

/// Projection for GET /api/votos/{realityNome}
pub fn votes_projection() -> Document {
    doc! {
        "_id": 0,
        "participantes.nome": 1,
        "participantes.total_votos": 1,
    }
}

/// Matches the show and, through the positional operator, the participant.
pub fn vote_filter(reality_nome: &str, participante_nome: &str) -> Document {
    doc! {
        "nome": exact_name(reality_nome),
        "participantes.nome": exact_name(participante_nome),
    }
}

pub fn vote_update() -> Document {
    doc! { "$inc": { "participantes.$.total_votos": 1 } }
}
