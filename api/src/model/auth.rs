use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
