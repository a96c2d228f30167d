use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateTopupRequest {
    #[validate(range(min = 1))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "Top-up amount must be at least 1"))]
    pub amount: i64,

    #[validate(length(min = 1, message = "Account type is required"))]
    pub account_type: String,

    #[validate(length(min = 1, message = "Account number is required"))]
    pub account_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateTopupRequest {
        CreateTopupRequest {
            user_id: 1,
            amount: 500,
            account_type: "bank".to_string(),
            account_number: "1234567890".to_string(),
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn zero_amount_is_rejected() {
        let request = CreateTopupRequest {
            amount: 0,
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("amount"));
    }

    #[test]
    fn missing_account_metadata_is_rejected() {
        let request = CreateTopupRequest {
            account_type: String::new(),
            account_number: String::new(),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("account_type"));
        assert!(errors.field_errors().contains_key("account_number"));
    }
}
