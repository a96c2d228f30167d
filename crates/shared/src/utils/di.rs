use std::sync::Arc;

use crate::{
    abstract_trait::{
        DynAnnouncementRepository, DynAnnouncementService, DynTopupRepository, DynTopupService,
        DynUserRepository, DynUserService,
    },
    config::ConnectionPool,
    repository::{
        announcement::AnnouncementRepository, topup::TopupRepository, user::UserRepository,
    },
    service::{announcement::AnnouncementService, topup::TopupService, user::UserService},
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_service: DynUserService,
    pub announcement_service: DynAnnouncementService,
    pub topup_service: DynTopupService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("user_service", &"DynUserService")
            .field("announcement_service", &"DynAnnouncementService")
            .field("topup_service", &"DynTopupService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let user_repository = Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;

        let announcement_repository =
            Arc::new(AnnouncementRepository::new(pool.clone())) as DynAnnouncementRepository;

        let topup_repository = Arc::new(TopupRepository::new(pool.clone())) as DynTopupRepository;

        let user_service = Arc::new(UserService::new(user_repository.clone())) as DynUserService;

        let announcement_service = Arc::new(AnnouncementService::new(
            announcement_repository.clone(),
        )) as DynAnnouncementService;

        let topup_service = Arc::new(TopupService::new(
            topup_repository.clone(),
            user_repository.clone(),
        )) as DynTopupService;

        Self {
            user_service,
            announcement_service,
            topup_service,
        }
    }
}
