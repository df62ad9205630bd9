/// Parsing of the minimum prize value taken from `/api/maior/{valor}`
use crate::error::ApiError;

pub const INVALID_PRIZE_VALUE: &str = "Valor de prêmio inválido";

/// Accepts any finite decimal number; a comma decimal separator is also
/// accepted ("1500,50"). Anything else is a 400.
pub fn parse_prize_value(raw: &str) -> Result<f64, ApiError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ApiError::BadRequest {
            message: INVALID_PRIZE_VALUE,
            detail: raw.to_string(),
        }),
    }
}
