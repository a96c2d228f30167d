use crate::model::announcement::Announcement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema, Clone)]
pub struct AnnouncementResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    #[schema(format = "date-time")]
    pub created_at: Option<DateTime<Utc>>,
    #[schema(format = "date-time")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(value: Announcement) -> Self {
        AnnouncementResponse {
            id: value.announcement_id,
            title: value.title,
            content: value.content,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
