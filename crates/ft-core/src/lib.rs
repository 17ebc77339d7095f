pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::expense::Expense;
pub use models::login_credentials::LoginCredentials;
pub use models::user::User;
