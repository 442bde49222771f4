use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::openai::OpenAiClient;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::goal::GoalRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::goal::GoalRepository;
use kernel::repository::guidance::GuidanceClient;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    goal_repository: Arc<dyn GoalRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    guidance_client: Arc<dyn GuidanceClient>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, kv: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let goal_repository = Arc::new(GoalRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            kv.clone(),
            app_config.auth.ttl,
        ));
        let guidance_client = Arc::new(OpenAiClient::new(app_config.ai.clone()));
        Self {
            health_check_repository,
            user_repository,
            goal_repository,
            auth_repository,
            guidance_client,
        }
    }

    /// Wires a registry from pre-built implementations. Used by handler
    /// tests to swap the adapters for in-memory fakes.
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        user_repository: Arc<dyn UserRepository>,
        goal_repository: Arc<dyn GoalRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        guidance_client: Arc<dyn GuidanceClient>,
    ) -> Self {
        Self {
            health_check_repository,
            user_repository,
            goal_repository,
            auth_repository,
            guidance_client,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn goal_repository(&self) -> Arc<dyn GoalRepository> {
        self.goal_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn guidance_client(&self) -> Arc<dyn GuidanceClient> {
        self.guidance_client.clone()
    }
}
