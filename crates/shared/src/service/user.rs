use async_trait::async_trait;
use tracing::{error, info};

use crate::{
    abstract_trait::{DynUserRepository, UserServiceTrait},
    domain::response::{ApiResponse, ErrorResponse, user::UserResponse},
};

pub struct UserService {
    user_repository: DynUserRepository,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("user_repository", &"DynUserRepository")
            .finish()
    }
}

impl UserService {
    pub fn new(user_repository: DynUserRepository) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_users(&self) -> Result<ApiResponse<Vec<UserResponse>>, ErrorResponse> {
        match self.user_repository.find_all_with_balance().await {
            Ok(users) => {
                let user_responses = users
                    .into_iter()
                    .map(UserResponse::from)
                    .collect::<Vec<_>>();

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Users retrieved successfully".to_string(),
                    data: user_responses,
                })
            }
            Err(err) => {
                error!("Failed to retrieve users: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn delete_user(&self, id: i32) -> Result<ApiResponse<()>, ErrorResponse> {
        match self.user_repository.delete(id).await {
            Ok(()) => {
                info!("User deleted successfully for id: {id}");

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "User deleted successfully".to_string(),
                    data: (),
                })
            }
            Err(err) => {
                error!("Failed to delete user {id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }
}
