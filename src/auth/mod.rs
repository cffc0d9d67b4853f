//! Authentication: password hashing, credential verification, register/login handlers.

mod authenticator;
mod handlers;
mod password;

pub use authenticator::{Authentication, AuthError, Authenticator, CredentialAuthenticator};
pub use handlers::{
    find_user, login, register, LoginRequest, RegisterRequest, INVALID_CREDENTIALS, LOGIN_FAILED,
    LOGIN_SUCCESSFUL,
};
pub use password::{Argon2Encoder, PasswordEncoder};
