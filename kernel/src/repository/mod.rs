pub mod auth;
pub mod goal;
pub mod guidance;
pub mod health;
pub mod user;
