use async_trait::async_trait;
use tracing::{error, info};

use crate::{
    abstract_trait::{DynTopupRepository, DynUserRepository, TopupServiceTrait},
    domain::{
        request::CreateTopupRequest,
        response::{ApiResponse, ErrorResponse, topup::TopupResponse},
    },
    model::topup::TopupStatus,
    utils::AppError,
};

pub struct TopupService {
    topup_repository: DynTopupRepository,
    user_repository: DynUserRepository,
}

impl std::fmt::Debug for TopupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopupService")
            .field("topup_repository", &"DynTopupRepository")
            .field("user_repository", &"DynUserRepository")
            .finish()
    }
}

impl TopupService {
    pub fn new(topup_repository: DynTopupRepository, user_repository: DynUserRepository) -> Self {
        Self {
            topup_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl TopupServiceTrait for TopupService {
    async fn get_topups(&self) -> Result<ApiResponse<Vec<TopupResponse>>, ErrorResponse> {
        match self.topup_repository.find_all().await {
            Ok(topups) => {
                let topup_responses = topups
                    .into_iter()
                    .map(TopupResponse::from)
                    .collect::<Vec<_>>();

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Topups retrieved successfully".to_string(),
                    data: topup_responses,
                })
            }
            Err(err) => {
                error!("Failed to retrieve topups: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn get_topups_by_status(
        &self,
        status: TopupStatus,
    ) -> Result<ApiResponse<Vec<TopupResponse>>, ErrorResponse> {
        info!("Listing {status} topups");

        match self.topup_repository.find_by_status(status).await {
            Ok(topups) => {
                let topup_responses = topups
                    .into_iter()
                    .map(TopupResponse::from)
                    .collect::<Vec<_>>();

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: format!("{status} topups retrieved successfully"),
                    data: topup_responses,
                })
            }
            Err(err) => {
                error!("Failed to retrieve {status} topups: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn get_topup(&self, id: i32) -> Result<ApiResponse<TopupResponse>, ErrorResponse> {
        match self.topup_repository.find_by_id(id).await {
            Ok(Some(topup)) => Ok(ApiResponse {
                status: "success".to_string(),
                message: "Topup retrieved successfully".to_string(),
                data: TopupResponse::from(topup),
            }),
            Ok(None) => {
                let msg = format!("Topup with ID {id} not found");
                error!("{msg}");
                Err(ErrorResponse::from(AppError::NotFound(msg)))
            }
            Err(err) => {
                error!("Error fetching topup with id {id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn create_topup(
        &self,
        input: &CreateTopupRequest,
    ) -> Result<ApiResponse<TopupResponse>, ErrorResponse> {
        let user = match self.user_repository.find_by_id(input.user_id).await {
            Ok(user) => user,
            Err(err) => {
                error!("Failed to fetch user {}: {err}", input.user_id);
                return Err(ErrorResponse::from(err));
            }
        };

        if user.is_none() {
            let msg = format!("User with ID {} not found", input.user_id);
            error!("{msg}");
            return Err(ErrorResponse::from(AppError::NotFound(msg)));
        }

        match self.topup_repository.create(input).await {
            Ok(topup) => {
                info!(
                    "Topup request of {} created for user {}",
                    topup.amount, topup.user_id
                );

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Topup created successfully".to_string(),
                    data: TopupResponse::from(topup),
                })
            }
            Err(err) => {
                error!("Failed to create topup for user {}: {err}", input.user_id);
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn approve_topup(&self, id: i32) -> Result<ApiResponse<TopupResponse>, ErrorResponse> {
        match self.topup_repository.approve(id).await {
            Ok((topup, wallet)) => {
                info!(
                    "Topup {id} approved, user {} balance is now {}",
                    wallet.user_id, wallet.balance
                );

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Topup approved successfully".to_string(),
                    data: TopupResponse::from(topup),
                })
            }
            Err(err) => {
                error!("Failed to approve topup {id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn decline_topup(&self, id: i32) -> Result<ApiResponse<TopupResponse>, ErrorResponse> {
        match self.topup_repository.decline(id).await {
            Ok(topup) => {
                info!("Topup {id} declined");

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Topup declined successfully".to_string(),
                    data: TopupResponse::from(topup),
                })
            }
            Err(err) => {
                error!("Failed to decline topup {id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }

    async fn delete_topup(&self, id: i32) -> Result<ApiResponse<()>, ErrorResponse> {
        match self.topup_repository.delete(id).await {
            Ok(()) => {
                info!("Topup deleted successfully for id: {id}");

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "Topup deleted successfully".to_string(),
                    data: (),
                })
            }
            Err(err) => {
                error!("Failed to delete topup {id}: {err}");
                Err(ErrorResponse::from(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{TopupRepositoryTrait, UserRepositoryTrait};
    use crate::model::topup::Topup;
    use crate::model::user::{User, UserWithBalance};
    use crate::model::wallet::Wallet;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryTopupRepository {
        topups: Mutex<Vec<Topup>>,
        wallets: Mutex<HashMap<i32, i64>>,
    }

    impl InMemoryTopupRepository {
        fn seed(topups: Vec<Topup>) -> Arc<Self> {
            Arc::new(Self {
                topups: Mutex::new(topups),
                wallets: Mutex::new(HashMap::new()),
            })
        }

        fn balance_of(&self, user_id: i32) -> i64 {
            self.wallets
                .lock()
                .unwrap()
                .get(&user_id)
                .copied()
                .unwrap_or(0)
        }
    }

    fn pending_topup(id: i32, user_id: i32, amount: i64) -> Topup {
        Topup {
            topup_id: id,
            user_id,
            amount,
            account_type: "bank".to_string(),
            account_number: "1234567890".to_string(),
            status: TopupStatus::Pending.as_str().to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[async_trait]
    impl TopupRepositoryTrait for InMemoryTopupRepository {
        async fn find_all(&self) -> Result<Vec<Topup>, AppError> {
            Ok(self.topups.lock().unwrap().clone())
        }

        async fn find_by_status(&self, status: TopupStatus) -> Result<Vec<Topup>, AppError> {
            Ok(self
                .topups
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.status == status.as_str())
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Topup>, AppError> {
            Ok(self
                .topups
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.topup_id == id)
                .cloned())
        }

        async fn create(&self, input: &CreateTopupRequest) -> Result<Topup, AppError> {
            let mut topups = self.topups.lock().unwrap();
            let topup = pending_topup(topups.len() as i32 + 1, input.user_id, input.amount);
            topups.push(topup.clone());
            Ok(topup)
        }

        async fn approve(&self, id: i32) -> Result<(Topup, Wallet), AppError> {
            let mut topups = self.topups.lock().unwrap();

            let topup = match topups.iter_mut().find(|t| t.topup_id == id) {
                Some(t) => t,
                None => {
                    return Err(AppError::NotFound(format!("Topup with ID {id} not found")));
                }
            };

            if topup.status != TopupStatus::Pending.as_str() {
                return Err(AppError::Conflict(format!(
                    "Topup with ID {id} is already {}",
                    topup.status
                )));
            }

            topup.status = TopupStatus::Approved.as_str().to_string();

            let mut wallets = self.wallets.lock().unwrap();
            let balance = wallets.entry(topup.user_id).or_insert(0);
            *balance += topup.amount;

            Ok((
                topup.clone(),
                Wallet {
                    wallet_id: 1,
                    user_id: topup.user_id,
                    balance: *balance,
                    created_at: None,
                    updated_at: None,
                },
            ))
        }

        async fn decline(&self, id: i32) -> Result<Topup, AppError> {
            let mut topups = self.topups.lock().unwrap();

            let topup = match topups.iter_mut().find(|t| t.topup_id == id) {
                Some(t) => t,
                None => {
                    return Err(AppError::NotFound(format!("Topup with ID {id} not found")));
                }
            };

            if topup.status != TopupStatus::Pending.as_str() {
                return Err(AppError::Conflict(format!(
                    "Topup with ID {id} is already {}",
                    topup.status
                )));
            }

            topup.status = TopupStatus::Declined.as_str().to_string();
            Ok(topup.clone())
        }

        async fn delete(&self, id: i32) -> Result<(), AppError> {
            let mut topups = self.topups.lock().unwrap();
            let before = topups.len();
            topups.retain(|t| t.topup_id != id);

            if topups.len() == before {
                return Err(AppError::NotFound(format!("Topup with ID {id} not found")));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUserRepository {
        async fn find_all_with_balance(&self) -> Result<Vec<UserWithBalance>, AppError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.user_id == id)
                .cloned())
        }

        async fn delete(&self, id: i32) -> Result<(), AppError> {
            let mut users = self.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.user_id != id);

            if users.len() == before {
                return Err(AppError::NotFound(format!("User with ID {id} not found")));
            }
            Ok(())
        }
    }

    fn known_user(id: i32) -> User {
        User {
            user_id: id,
            fullname: "Alice Tan".to_string(),
            mobile: "0100000000".to_string(),
            email: format!("user{id}@example.com"),
            password: "secret".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn service_with(
        topups: Arc<InMemoryTopupRepository>,
        users: Vec<User>,
    ) -> TopupService {
        let user_repository = Arc::new(InMemoryUserRepository {
            users: Mutex::new(users),
        });
        TopupService::new(topups, user_repository)
    }

    #[tokio::test]
    async fn approving_pending_topup_credits_wallet_once() {
        let repository = InMemoryTopupRepository::seed(vec![pending_topup(1, 1, 500)]);
        let service = service_with(repository.clone(), vec![known_user(1)]);

        let response = service.approve_topup(1).await.unwrap();
        assert_eq!(response.data.status, "approved");
        assert_eq!(repository.balance_of(1), 500);
    }

    #[tokio::test]
    async fn reapproving_is_conflict_and_never_double_credits() {
        let repository = InMemoryTopupRepository::seed(vec![pending_topup(1, 1, 500)]);
        let service = service_with(repository.clone(), vec![known_user(1)]);

        service.approve_topup(1).await.unwrap();
        let err = service.approve_topup(1).await.unwrap_err();

        assert_eq!(err.status, "conflict");
        assert_eq!(repository.balance_of(1), 500);
    }

    #[tokio::test]
    async fn approving_missing_topup_is_not_found() {
        let repository = InMemoryTopupRepository::seed(vec![]);
        let service = service_with(repository, vec![known_user(1)]);

        let err = service.approve_topup(42).await.unwrap_err();
        assert_eq!(err.status, "not_found");
    }

    #[tokio::test]
    async fn declining_leaves_balance_untouched() {
        let repository = InMemoryTopupRepository::seed(vec![pending_topup(1, 1, 200)]);
        let service = service_with(repository.clone(), vec![known_user(1)]);

        let response = service.decline_topup(1).await.unwrap();
        assert_eq!(response.data.status, "declined");
        assert_eq!(repository.balance_of(1), 0);
    }

    #[tokio::test]
    async fn declining_approved_topup_is_conflict() {
        let repository = InMemoryTopupRepository::seed(vec![pending_topup(1, 1, 500)]);
        let service = service_with(repository.clone(), vec![known_user(1)]);

        service.approve_topup(1).await.unwrap();
        let err = service.decline_topup(1).await.unwrap_err();

        assert_eq!(err.status, "conflict");
        assert_eq!(repository.balance_of(1), 500);
    }

    #[tokio::test]
    async fn status_listings_are_disjoint() {
        let repository = InMemoryTopupRepository::seed(vec![
            pending_topup(1, 1, 100),
            pending_topup(2, 1, 200),
            pending_topup(3, 1, 300),
        ]);
        let service = service_with(repository, vec![known_user(1)]);

        service.approve_topup(1).await.unwrap();
        service.decline_topup(2).await.unwrap();

        let approved = service
            .get_topups_by_status(TopupStatus::Approved)
            .await
            .unwrap();
        let declined = service
            .get_topups_by_status(TopupStatus::Declined)
            .await
            .unwrap();

        assert_eq!(approved.data.len(), 1);
        assert_eq!(approved.data[0].topup_id, 1);
        assert_eq!(declined.data.len(), 1);
        assert_eq!(declined.data[0].topup_id, 2);
    }

    #[tokio::test]
    async fn creating_topup_for_unknown_user_is_not_found() {
        let repository = InMemoryTopupRepository::seed(vec![]);
        let service = service_with(repository.clone(), vec![]);

        let err = service
            .create_topup(&CreateTopupRequest {
                user_id: 7,
                amount: 500,
                account_type: "bank".to_string(),
                account_number: "1234567890".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status, "not_found");
        assert!(repository.topups.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_topup_starts_pending() {
        let repository = InMemoryTopupRepository::seed(vec![]);
        let service = service_with(repository, vec![known_user(1)]);

        let response = service
            .create_topup(&CreateTopupRequest {
                user_id: 1,
                amount: 500,
                account_type: "bank".to_string(),
                account_number: "1234567890".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.data.status, "pending");
        assert_eq!(response.data.amount, 500);
    }
}
