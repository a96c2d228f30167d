pub mod announcement;
pub mod topup;

pub use self::announcement::CreateAnnouncementRequest;
pub use self::topup::CreateTopupRequest;
