//! External service abstractions.
//!
//! ## Services
//!
//! - **email** - Transactional email over SMTP (lettre)
//! - **tokens** - Session JWT issuance
//! - **password** - Argon2 password hashing
//!
//! ## Usage in Handlers
//!
//! ```ignore
//! async fn handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
//!     state.email.send(&email, subject, &body).await?;
//!     let token = state.tokens.issue(&user)?;
//! }
//! ```

mod email;
pub mod password;
mod tokens;

pub use email::{EmailSender, SmtpEmailSender, verification_email};
pub use tokens::TokenService;

#[cfg(test)]
pub use email::MockEmailSender;
