//! Sign out by deleting the stored session token.
//!
//! Tokens are stateless on the server, so nothing is revoked remotely; the
//! token simply stops being available to this machine.

use anyhow::Result;

use crate::{config::Config, credentials, ui};

pub fn run(config: &Config) -> Result<()> {
    credentials::delete_all(config)?;
    ui::success("Signed out");
    Ok(())
}
