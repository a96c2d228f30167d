pub mod announcement;
pub mod topup;
pub mod user;
