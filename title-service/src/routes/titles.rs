use crate::models::error::ApiError;
use crate::models::responses::{GenerateRequest, TitlesResponse};
use crate::services::generation::{GenerationError, TitleProvider};
use crate::utils::titles::parse_titles;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

type Provider = Arc<dyn TitleProvider + Send + Sync>;

pub async fn generate_titles(
    State(provider): State<Provider>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<TitlesResponse>, ApiError> {
    let topic = request.topic.trim();

    if topic.is_empty() {
        return Err(ApiError::Validation("Topic is required".to_string()));
    }

    let request_id = Uuid::new_v4();
    info!("Generating titles for topic '{}' ({})", topic, request_id);

    match provider.complete(topic).await {
        Ok(content) => {
            let titles = parse_titles(&content);
            info!("Returning {} titles ({})", titles.len(), request_id);
            Ok(Json(TitlesResponse { titles }))
        }
        Err(GenerationError::Api { status, message }) => {
            error!(
                "Completion API rejected request {} with status {}: {}",
                request_id, status, message
            );
            Err(ApiError::Upstream { status, message })
        }
        Err(e) => {
            error!("Failed to generate titles for request {}: {}", request_id, e);
            Err(ApiError::Internal)
        }
    }
}
