//! Create an account.
//!
//! New accounts start unverified. The password is checked locally against the
//! same rules the server applies, so obvious mistakes fail without a round trip.

use anyhow::Result;
use garde::Validate;
use shared::api::SignupPayload;

use crate::{api::Api, config::Config, ui};

pub async fn run(config: &Config, email: &str, password: String) -> Result<()> {
    let payload = SignupPayload {
        email: email.to_string(),
        password,
    };
    payload.validate()?;

    let api = Api::new(config.api_url.clone());
    ui::spin("Creating account...", api.signup(payload)).await?;

    ui::success(&format!("Account created for {}", ui::bold(email)));
    ui::info("Sign in with: todo login <email>");

    Ok(())
}
