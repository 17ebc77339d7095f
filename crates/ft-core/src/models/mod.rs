pub mod expense;
pub mod login_credentials;
pub mod user;
