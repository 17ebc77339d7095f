pub mod get_current_user_use_case;
pub mod home_use_case;
pub mod login_use_case;
pub mod logout_use_case;
