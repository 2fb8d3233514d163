//! Business logic services

mod user;

pub use user::UserService;
