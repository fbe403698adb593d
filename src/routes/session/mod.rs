mod handler;
mod model;

pub use handler::{current_user, log_in, log_out};
pub use model::{CurrentUserResponse, LogInRequest, LogInResponse, LogOutResponse};
