pub mod database;
pub mod openai;
pub mod redis;
pub mod repository;
