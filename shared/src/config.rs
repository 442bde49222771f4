use anyhow::{Context, Result};
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub ai: AiConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env_or("DATABASE_HOST", "localhost"),
            port: env_or("DATABASE_PORT", "5432")
                .parse()
                .context("DATABASE_PORT must be a port number")?,
            username: env_or("DATABASE_USERNAME", "app"),
            password: env_or("DATABASE_PASSWORD", "passwd"),
            database: env_or("DATABASE_NAME", "app"),
        };
        let redis = RedisConfig {
            host: env_or("REDIS_HOST", "localhost"),
            port: env_or("REDIS_PORT", "6379")
                .parse()
                .context("REDIS_PORT must be a port number")?,
        };
        let auth = AuthConfig {
            ttl: env_or("AUTH_SESSION_TTL", "86400")
                .parse()
                .context("AUTH_SESSION_TTL must be seconds")?,
        };
        let ai = AiConfig {
            base_url: env_or("AI_OPENAI_BASE_URL", ""),
            api_key: env_or("AI_OPENAI_API_KEY", ""),
            model: env_or("AI_OPENAI_MODEL", "gpt-4.1-mini"),
            system_prompt: env_or(
                "GUIDANCE_SYSTEM_PROMPT",
                "You are a supportive goal-planning coach. Give practical, concrete advice.",
            ),
        };
        Ok(Self {
            database,
            redis,
            auth,
            ai,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    pub ttl: u64,
}

/// Settings for the external completion endpoint. A blank base URL or API
/// key switches the guidance client to its offline stub.
#[derive(Clone)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub system_prompt: String,
}
