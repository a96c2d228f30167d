use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Presence only: the board accepts empty titles and bodies as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_and_content_are_accepted() {
        let request = CreateAnnouncementRequest {
            title: String::new(),
            content: String::new(),
        };

        assert!(request.validate().is_ok());
    }
}
