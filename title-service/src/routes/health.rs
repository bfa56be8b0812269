use crate::models::responses::HealthResponse;
use axum::response::Json;
use chrono::Utc;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::health_check;
    use chrono::DateTime;

    #[tokio::test]
    async fn reports_ok_with_a_valid_timestamp() {
        let health = health_check().await.0;

        assert_eq!(health.status, "OK");
        assert!(DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }
}
