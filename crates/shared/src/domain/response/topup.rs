use crate::model::topup::Topup;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct TopupResponse {
    pub topup_id: i32,
    pub user_id: i32,
    pub amount: i64,
    pub account_type: String,
    pub account_number: String,
    pub status: String,
    #[schema(format = "date-time")]
    pub created_at: Option<DateTime<Utc>>,
    #[schema(format = "date-time")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Topup> for TopupResponse {
    fn from(value: Topup) -> Self {
        TopupResponse {
            topup_id: value.topup_id,
            user_id: value.user_id,
            amount: value.amount,
            account_type: value.account_type,
            account_number: value.account_number,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_mirrors_record_fields() {
        let topup = Topup {
            topup_id: 9,
            user_id: 4,
            amount: 200,
            account_type: "card".to_string(),
            account_number: "4111".to_string(),
            status: "pending".to_string(),
            created_at: None,
            updated_at: None,
        };

        let response = TopupResponse::from(topup);
        assert_eq!(response.topup_id, 9);
        assert_eq!(response.user_id, 4);
        assert_eq!(response.amount, 200);
        assert_eq!(response.status, "pending");
    }
}
