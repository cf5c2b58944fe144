use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{BmiRequest, BmiResponse};
use crate::services::classifier::{compute_bmi, BmiClassification};
use crate::services::tips::TipService;

/// Computes the IMC for one measurement and asks Gemini for a wellness tip.
/// Tip failures degrade into an inline notice; the IMC result is always
/// returned when the measurement is valid.
pub async fn calculate_bmi(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<BmiRequest>,
) -> Result<Json<BmiResponse>, AppError> {
    request.validate().map_err(AppError::ValidationError)?;

    let bmi = compute_bmi(request.weight_kg, request.height_m);
    if !bmi.is_finite() {
        return Err(AppError::BadRequest(
            "Os valores inseridos são muito grandes para calcular o IMC. Por favor, verifique."
                .to_string(),
        ));
    }

    let classification = BmiClassification::from_bmi(bmi);
    debug!("Computed IMC {:.2} ({})", bmi, classification.label());

    let tip_service = TipService::new(&state);
    let (tip, sources) = match tip_service.generate_tips(classification).await {
        Ok(tip) => (tip.text, tip.sources),
        Err(e) => {
            warn!("Tip generation failed: {}", e);
            (e.to_string(), Vec::new())
        }
    };

    Ok(Json(BmiResponse {
        bmi,
        classification: classification.label().to_string(),
        tip,
        sources,
    }))
}
