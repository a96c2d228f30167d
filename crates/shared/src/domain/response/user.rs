use crate::model::user::UserWithBalance;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Directory entry: identity plus current wallet balance. The password
/// column never leaves the store.
#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub fullname: String,
    pub mobile: String,
    pub email: String,
    pub balance: i64,
    #[schema(format = "date-time")]
    pub created_at: Option<DateTime<Utc>>,
    #[schema(format = "date-time")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<UserWithBalance> for UserResponse {
    fn from(value: UserWithBalance) -> Self {
        UserResponse {
            id: value.user_id,
            fullname: value.fullname,
            mobile: value.mobile,
            email: value.email,
            balance: value.balance,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_joined_balance() {
        let row = UserWithBalance {
            user_id: 3,
            fullname: "Alice Tan".to_string(),
            mobile: "0123456789".to_string(),
            email: "alice@example.com".to_string(),
            balance: 500,
            created_at: None,
            updated_at: None,
        };

        let response = UserResponse::from(row);
        assert_eq!(response.id, 3);
        assert_eq!(response.balance, 500);
        assert_eq!(response.email, "alice@example.com");
    }
}
