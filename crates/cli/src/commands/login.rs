//! Sign in and store the session token locally.

use anyhow::Result;
use shared::api::LoginPayload;

use crate::{api::Api, config::Config, credentials, session, ui};

pub async fn run(config: &Config, email: &str, password: String) -> Result<()> {
    let api = Api::new(config.api_url.clone());

    let response = ui::spin(
        "Signing in...",
        api.login(LoginPayload {
            email: email.to_string(),
            password,
        }),
    )
    .await?;

    let claims = session::decode_claims(&response.token)?;
    credentials::set_token(config, response.token)?;

    ui::success(&format!("Signed in as {}", ui::bold(&claims.email)));
    if !claims.verified {
        ui::info("Your email is not verified yet. Run: todo verify");
    }

    Ok(())
}
