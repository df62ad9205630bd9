pub mod reality;

pub use reality::{
    AudienciaEmissora, IdadeInfo, MessageResponse, Numero, Participante, ParticipanteIdade,
    ParticipantePremios, ParticipantePremiosFiltrados, Premio, RealityPremios,
    RealityPremiosFiltrados, RealityShow, RealityVotos, TotalPorReality, TotalPremios,
    VotosParticipante,
};
