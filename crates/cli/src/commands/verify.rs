//! Verify ownership of the signed-in email address.
//!
//! Flow:
//! 1. Request a one-time code for the session's email
//! 2. User enters the code from their inbox
//! 3. Submit the code; it is consumed on success
//! 4. Mark the account verified
//!
//! The stored token still carries `verified: false` until the next login.

use anyhow::Result;
use shared::api::{RequestVerifyPayload, VerifyCodePayload, VerifyUserPayload};

use crate::{api::Api, config::Config, session, ui};

pub async fn run(config: &Config) -> Result<()> {
    let claims = session::current(config)?;
    if claims.verified {
        ui::success(&format!("{} is already verified", ui::bold(&claims.email)));
        return Ok(());
    }

    let api = Api::new(config.api_url.clone());
    ui::spin(
        "Sending verification code...",
        api.request_verify(RequestVerifyPayload {
            email: claims.email.clone(),
        }),
    )
    .await?;

    let code = ui::prompt_code()?;

    confirm(&api, &claims.email, code).await?;

    ui::success(&format!("{} verified", ui::bold(&claims.email)));
    ui::info("Sign in again to refresh your session: todo login <email>");

    Ok(())
}

/// Submit `code` and, if accepted, mark the account verified.
async fn confirm(api: &Api, email: &str, code: String) -> Result<()> {
    ui::spin(
        "Verifying...",
        api.verify_code(VerifyCodePayload {
            email: email.to_string(),
            code,
        }),
    )
    .await?;

    ui::spin(
        "Updating account...",
        api.verify_user(VerifyUserPayload {
            email: email.to_string(),
        }),
    )
    .await
}
