use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct User {
    pub user_id: i32,
    pub fullname: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Row shape of the users-to-wallets listing join. Users without a wallet
/// row carry a balance of 0.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct UserWithBalance {
    pub user_id: i32,
    pub fullname: String,
    pub mobile: String,
    pub email: String,
    pub balance: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
