use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        request::CreateTopupRequest,
        response::{ApiResponse, ErrorResponse, topup::TopupResponse},
    },
    model::{
        topup::{Topup, TopupStatus},
        wallet::Wallet,
    },
    utils::AppError,
};

pub type DynTopupRepository = Arc<dyn TopupRepositoryTrait + Send + Sync>;
pub type DynTopupService = Arc<dyn TopupServiceTrait + Send + Sync>;

#[async_trait]
pub trait TopupRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Topup>, AppError>;
    async fn find_by_status(&self, status: TopupStatus) -> Result<Vec<Topup>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Topup>, AppError>;
    async fn create(&self, input: &CreateTopupRequest) -> Result<Topup, AppError>;

    /// Flips a pending request to approved and credits the owner's wallet
    /// in the same transaction. A request that is not pending yields
    /// Conflict; a missing one yields NotFound.
    async fn approve(&self, id: i32) -> Result<(Topup, Wallet), AppError>;

    /// Flips a pending request to declined. No balance side effect.
    async fn decline(&self, id: i32) -> Result<Topup, AppError>;

    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

#[async_trait]
pub trait TopupServiceTrait {
    async fn get_topups(&self) -> Result<ApiResponse<Vec<TopupResponse>>, ErrorResponse>;
    async fn get_topups_by_status(
        &self,
        status: TopupStatus,
    ) -> Result<ApiResponse<Vec<TopupResponse>>, ErrorResponse>;
    async fn get_topup(&self, id: i32) -> Result<ApiResponse<TopupResponse>, ErrorResponse>;
    async fn create_topup(
        &self,
        input: &CreateTopupRequest,
    ) -> Result<ApiResponse<TopupResponse>, ErrorResponse>;
    async fn approve_topup(&self, id: i32) -> Result<ApiResponse<TopupResponse>, ErrorResponse>;
    async fn decline_topup(&self, id: i32) -> Result<ApiResponse<TopupResponse>, ErrorResponse>;
    async fn delete_topup(&self, id: i32) -> Result<ApiResponse<()>, ErrorResponse>;
}
