pub mod announcement;
pub mod topup;
pub mod user;

pub use self::announcement::{
    AnnouncementRepositoryTrait, AnnouncementServiceTrait, DynAnnouncementRepository,
    DynAnnouncementService,
};

pub use self::topup::{
    DynTopupRepository, DynTopupService, TopupRepositoryTrait, TopupServiceTrait,
};

pub use self::user::{DynUserRepository, DynUserService, UserRepositoryTrait, UserServiceTrait};
