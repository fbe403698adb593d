use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LogInRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LogInResponse {
    pub msg: &'static str,
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct LogOutResponse {
    pub msg: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: String,
}
