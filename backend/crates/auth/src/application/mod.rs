//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod read_session;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod validate_credentials;
pub mod verify_session;

// Re-exports
pub use config::AuthConfig;
pub use read_session::{ReadSessionUseCase, SessionView};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use validate_credentials::ValidateCredentialsUseCase;
pub use verify_session::VerifySessionUseCase;
