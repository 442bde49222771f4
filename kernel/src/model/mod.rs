pub mod auth;
pub mod goal;
pub mod id;
pub mod user;
