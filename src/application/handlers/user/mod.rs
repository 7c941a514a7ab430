//! User handlers - registration, login, logout, push preferences.

mod login_user;
mod logout_user;
mod register_user;
mod update_preferences;

pub use login_user::{LoginUserCommand, LoginUserHandler, LoginUserResult};
pub use logout_user::{LogoutUserCommand, LogoutUserHandler, LogoutUserResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
pub use update_preferences::{
    UpdatePreferencesCommand, UpdatePreferencesHandler, UpdatePreferencesResult,
};
