use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use shared::{domain::response::ErrorResponse, utils::AppError};
use validator::Validate;

/// JSON extractor that rejects malformed or rule-breaking bodies with 400
/// before the handler runs.
pub struct SimpleValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|err| {
            let response = ErrorResponse {
                status: "validation_error".to_string(),
                message: err.body_text(),
            };
            (StatusCode::BAD_REQUEST, Json(json!(response)))
        })?;

        value.validate().map_err(|errors| {
            let response = ErrorResponse::from(AppError::ValidationError(errors));
            (StatusCode::BAD_REQUEST, Json(json!(response)))
        })?;

        Ok(SimpleValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use shared::domain::request::CreateTopupRequest;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn well_formed_body_is_extracted() {
        let req = json_request(
            r#"{"user_id":1,"amount":500,"account_type":"bank","account_number":"1234567890"}"#,
        );

        let SimpleValidatedJson(body) =
            SimpleValidatedJson::<CreateTopupRequest>::from_request(req, &())
                .await
                .unwrap();

        assert_eq!(body.amount, 500);
    }

    #[tokio::test]
    async fn rule_breaking_body_is_rejected_with_400() {
        let req = json_request(
            r#"{"user_id":1,"amount":0,"account_type":"bank","account_number":"1234567890"}"#,
        );

        let (status, _) = SimpleValidatedJson::<CreateTopupRequest>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_with_400() {
        let req = json_request("{not json");

        let (status, _) = SimpleValidatedJson::<CreateTopupRequest>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
