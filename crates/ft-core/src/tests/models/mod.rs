mod expense;
mod login_credentials;
mod user;
