pub mod auth;
pub mod goal;
pub mod health;
pub mod user;
