//! Session layer: the user repository and its use cases.
//!
//! Composes the auth client and the local user store behind one interface
//! (the "repository"), with single-operation services on top that screens
//! call directly. Dependencies are passed through constructors; there is no
//! container.

pub mod error;
pub mod use_cases;
pub mod user_repository;

pub use error::{Result, SessionError};
pub use use_cases::get_current_user_use_case::GetCurrentUserUseCase;
pub use use_cases::home_use_case::{HomeSummary, HomeUseCase};
pub use use_cases::login_use_case::LoginUseCase;
pub use use_cases::logout_use_case::LogoutUseCase;
pub use user_repository::UserRepository;
