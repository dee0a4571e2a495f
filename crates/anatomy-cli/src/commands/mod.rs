pub mod auth;
pub mod dispatch;
pub mod profile;
pub mod route;
pub mod shared;
pub mod subscription;
