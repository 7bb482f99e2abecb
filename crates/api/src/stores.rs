//! Ephemeral in-process stores.
//!
//! Nothing here survives a restart. State lives in memory for the lifetime of
//! the process and is shared between request handlers through `state.stores`.
//!
//! ## Stores
//!
//! - **otp** - One-time email verification codes (single use, TTL-based expiry)
//!
//! ## Usage in Handlers
//!
//! ```ignore
//! async fn handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
//!     let code = state.stores.otp.issue(&email, ttl)?;
//!     let ok = state.stores.otp.verify(&email, &code);
//! }
//! ```

mod otp;

pub use otp::{MemoryOtpStore, OtpStore};

#[cfg(test)]
pub use otp::MockOtpStore;

use std::sync::Arc;

/// Collection of all ephemeral stores.
#[derive(Clone)]
pub struct Stores {
    pub otp: Arc<dyn OtpStore>,
}
