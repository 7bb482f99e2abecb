//! Show the signed-in account, decoded from the stored session token.

use chrono_humanize::HumanTime;

use crate::{config::Config, session, ui};

pub fn run(config: &Config) -> anyhow::Result<()> {
    let claims = session::current(config)?;

    println!("{}", ui::bold(&claims.email));
    println!(
        "Verified: {}",
        if claims.verified { "yes" } else { "no" }
    );
    if let Some(expires_at) = session::expires_at(&claims) {
        println!(
            "{}",
            ui::dim(&format!("Session expires {}", HumanTime::from(expires_at)))
        );
    }

    Ok(())
}
