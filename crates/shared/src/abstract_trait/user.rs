use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::response::{ApiResponse, ErrorResponse, user::UserResponse},
    model::user::{User, UserWithBalance},
    utils::AppError,
};

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_all_with_balance(&self) -> Result<Vec<UserWithBalance>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Removes the user along with their topups and wallet in one unit.
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserServiceTrait {
    async fn get_users(&self) -> Result<ApiResponse<Vec<UserResponse>>, ErrorResponse>;
    async fn delete_user(&self, id: i32) -> Result<ApiResponse<()>, ErrorResponse>;
}
