use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Topup {
    pub topup_id: i32,
    pub user_id: i32,
    pub amount: i64,
    pub account_type: String,
    pub account_number: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lifecycle of a top-up request. Pending is the only state a request can
/// leave; approved and declined are both terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopupStatus {
    Pending,
    Approved,
    Declined,
}

impl TopupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopupStatus::Pending => "pending",
            TopupStatus::Approved => "approved",
            TopupStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for TopupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_stored_text() {
        assert_eq!(TopupStatus::Pending.as_str(), "pending");
        assert_eq!(TopupStatus::Approved.as_str(), "approved");
        assert_eq!(TopupStatus::Declined.as_str(), "declined");
    }

    #[test]
    fn status_displays_as_stored_text() {
        assert_eq!(TopupStatus::Approved.to_string(), "approved");
    }
}
