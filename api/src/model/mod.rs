pub mod auth;
pub mod goal;
