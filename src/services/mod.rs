//! Business logic: user registration and lookup.

pub mod credential;

pub use credential::CredentialService;
