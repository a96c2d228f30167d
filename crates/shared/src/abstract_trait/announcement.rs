use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        request::CreateAnnouncementRequest,
        response::{ApiResponse, ErrorResponse, announcement::AnnouncementResponse},
    },
    model::announcement::Announcement,
    utils::AppError,
};

pub type DynAnnouncementRepository = Arc<dyn AnnouncementRepositoryTrait + Send + Sync>;
pub type DynAnnouncementService = Arc<dyn AnnouncementServiceTrait + Send + Sync>;

#[async_trait]
pub trait AnnouncementRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Announcement>, AppError>;
    async fn create(&self, input: &CreateAnnouncementRequest) -> Result<Announcement, AppError>;
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

#[async_trait]
pub trait AnnouncementServiceTrait {
    async fn get_announcements(
        &self,
    ) -> Result<ApiResponse<Vec<AnnouncementResponse>>, ErrorResponse>;
    async fn create_announcement(
        &self,
        input: &CreateAnnouncementRequest,
    ) -> Result<ApiResponse<AnnouncementResponse>, ErrorResponse>;
    async fn delete_announcement(&self, id: i32) -> Result<ApiResponse<()>, ErrorResponse>;
}
