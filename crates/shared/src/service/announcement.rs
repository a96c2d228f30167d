use async_trait::async_trait;
use tracing::{error, info};

use crate::{
    abstract_trait::{AnnouncementServiceTrait, DynAnnouncementRepository},
    domain::{
        request::CreateAnnouncementRequest,
        response::{ApiResponse, ErrorResponse, announcement::AnnouncementResponse},
    },
};

pub struct AnnouncementService {
    announcement_repository: DynAnnouncementRepository,
}

impl std::fmt::Debug for AnnouncementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnouncementService")
            .field("announcement_repository", &"DynAnnouncementRepository")
            .finish()
    }
}

impl AnnouncementService {
    pub fn new(announcement_repository: DynAnnouncementRepository) -> Self {
        Self {
            announcement_repository,
        }
    }
}

#[async_trait]
impl AnnouncementServiceTrait for AnnouncementService {
    async fn get_announcements(
        &self,
    ) -> Result<ApiResponse<Vec<AnnouncementResponse>>, ErrorResponse> {
        match self.announcement_repository.find_all().await {
            Ok(announcements) => {
                let announcement_responses = announcements
                    .into_iter()
                    .map(AnnouncementResponse::from)
                    .collect::<Vec<_>>();

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Announcements retrieved successfully".to_string(),
                    data: announcement_responses,
                })
            }
            Err(err) => {
                error!("Failed to retrieve announcements: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn create_announcement(
        &self,
        input: &CreateAnnouncementRequest,
    ) -> Result<ApiResponse<AnnouncementResponse>, ErrorResponse> {
        match self.announcement_repository.create(input).await {
            Ok(announcement) => {
                info!("Announcement '{}' published", announcement.title);

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Announcement created successfully".to_string(),
                    data: AnnouncementResponse::from(announcement),
                })
            }
            Err(err) => {
                error!("Failed to create announcement: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn delete_announcement(&self, id: i32) -> Result<ApiResponse<()>, ErrorResponse> {
        match self.announcement_repository.delete(id).await {
            Ok(()) => {
                info!("Announcement deleted successfully for id: {id}");

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Announcement deleted successfully".to_string(),
                    data: (),
                })
            }
            Err(err) => {
                error!("Failed to delete announcement {id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }
}
