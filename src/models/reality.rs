use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Deserializer, Serialize};

/// A stored number of whatever BSON width it was written with. Integers stay
/// integers in the JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numero {
    Inteiro(i64),
    Decimal(f64),
}

impl Numero {
    pub fn from_bson(value: &Bson) -> Option<Self> {
        match value {
            Bson::Int32(n) => Some(Numero::Inteiro(i64::from(*n))),
            Bson::Int64(n) => Some(Numero::Inteiro(*n)),
            Bson::Double(n) if n.is_finite() => Some(Numero::Decimal(*n)),
            _ => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Numero::Inteiro(n) => n as f64,
            Numero::Decimal(n) => n,
        }
    }
}

/// Any numeric BSON; non-numeric or missing values become `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<Numero>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Bson>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Numero::from_bson))
}

/// Vote counters: any numeric BSON, truncated; anything else counts as 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match lenient_number(deserializer)? {
        Some(Numero::Inteiro(n)) => n,
        Some(Numero::Decimal(n)) => n as i64,
        None => 0,
    })
}

/// Text fields; anything that is not a string is dropped.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Bson>::deserialize(deserializer)? {
        Some(Bson::String(s)) => Some(s),
        _ => None,
    })
}

/// A document in the `reality_shows` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealityShow {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub emissora: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub audiencia_pontos: Option<Numero>,
    #[serde(default)]
    pub participantes: Vec<Participante>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participante {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub idade: Option<Numero>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_votos: i64,
    #[serde(default)]
    pub premios_ganhos: Vec<Premio>,
}

/// Only `valor` is interpreted; any other stored prize field is kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Premio {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub valor: Option<Numero>,
    #[serde(flatten)]
    pub detalhes: Document,
}

// Response shapes. Each mirrors the projection or `$project` stage of the
// query that produces it.

/// GET /api/premios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealityPremios {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default)]
    pub participantes: Vec<ParticipantePremios>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantePremios {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub idade: Option<Numero>,
    #[serde(default)]
    pub premios_ganhos: Vec<Premio>,
}

/// GET /api/idade/{nome}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdadeInfo {
    pub reality_show: String,
    pub participante_mais_novo: ParticipanteIdade,
    pub participante_mais_velho: ParticipanteIdade,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipanteIdade {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub idade: Option<Numero>,
}

/// GET /api/maior/{valor}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealityPremiosFiltrados {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub emissora: Option<String>,
    #[serde(default)]
    pub participantes: Vec<ParticipantePremiosFiltrados>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantePremiosFiltrados {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default)]
    pub premios_ganhos: Vec<Premio>,
}

/// GET /api/total
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TotalPremios {
    #[serde(default)]
    pub totais_por_reality: Vec<TotalPorReality>,
    /// Absent from the `$facet` output when no prize exists
    #[serde(default)]
    pub total_geral: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalPorReality {
    pub reality_show: String,
    pub total_premios: i64,
}

/// GET /api/audiencia
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienciaEmissora {
    #[serde(default, deserialize_with = "lenient_text")]
    pub emissora: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_audiencia: Option<Numero>,
}

/// GET /api/votos/{realityNome}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotosParticipante {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_votos: i64,
}

/// Projection target for the votes lookup
#[derive(Debug, Clone, Deserialize)]
pub struct RealityVotos {
    pub participantes: Option<Vec<VotosParticipante>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_missing_counters_default_to_zero() {
        let raw = doc! {
            "nome": "Big Brother",
            "emissora": "Globo",
            "audiencia_pontos": 27,
            "participantes": [
                { "nome": "Ana", "idade": 25 },
                { "nome": "Bruno", "idade": 31, "total_votos": 4_i64 },
            ]
        };

        let show: RealityShow = bson::from_document(raw).unwrap();
        assert_eq!(show.audiencia_pontos, Some(Numero::Inteiro(27)));
        assert_eq!(show.participantes[0].total_votos, 0);
        assert!(show.participantes[0].premios_ganhos.is_empty());
        assert_eq!(show.participantes[1].total_votos, 4);
    }

    #[test]
    fn test_off_schema_participants_are_tolerated() {
        let raw = doc! {
            "nome": "BBB",
            "participantes": [
                { "nome": "Ana", "idade": 25.0, "premios_ganhos": [] },
                { "idade": "vinte", "premios_ganhos": [{ "descricao": "Carro" }] },
            ]
        };

        // Same path as the driver: raw BSON bytes into the response shape
        let bytes = bson::to_vec(&raw).unwrap();
        let show: RealityPremios = bson::from_slice(&bytes).unwrap();

        let ana = &show.participantes[0];
        assert_eq!(ana.idade, Some(Numero::Decimal(25.0)));

        let anonimo = &show.participantes[1];
        assert!(anonimo.nome.is_none());
        assert!(anonimo.idade.is_none());
        assert!(anonimo.premios_ganhos[0].valor.is_none());

        let json = serde_json::to_value(&show).unwrap();
        assert_eq!(json["participantes"][0]["idade"], 25.0);
        assert!(json["participantes"][1].get("nome").is_none());
        assert_eq!(
            json["participantes"][1]["premios_ganhos"][0],
            serde_json::json!({ "descricao": "Carro" })
        );
    }

    #[test]
    fn test_fractional_vote_counter_truncated() {
        let raw = doc! { "nome": "Ana", "total_votos": 7.0 };
        let bytes = bson::to_vec(&raw).unwrap();

        let votos: VotosParticipante = bson::from_slice(&bytes).unwrap();
        assert_eq!(votos.total_votos, 7);
    }

    #[test]
    fn test_prize_keeps_extra_fields() {
        let raw = doc! { "valor": 5000, "descricao": "Carro" };

        let premio: Premio = bson::from_document(raw).unwrap();
        assert_eq!(premio.valor, Some(Numero::Inteiro(5000)));
        assert_eq!(premio.detalhes.get_str("descricao").unwrap(), "Carro");

        let json = serde_json::to_value(&premio).unwrap();
        assert_eq!(json["descricao"], "Carro");
        assert_eq!(json["valor"], 5000);
    }

    #[test]
    fn test_total_premios_without_total_geral() {
        let raw = doc! { "totais_por_reality": [] };

        let total: TotalPremios = bson::from_document(raw).unwrap();
        assert!(total.totais_por_reality.is_empty());
        assert_eq!(total.total_geral, 0);
    }

    #[test]
    fn test_votes_projection_without_participants() {
        let votos: RealityVotos = bson::from_document(doc! {}).unwrap();
        assert!(votos.participantes.is_none());
    }
}
