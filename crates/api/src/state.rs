use std::sync::Arc;

use crate::{
    config::Config,
    repos::Repos,
    services::{EmailSender, TokenService},
    stores::Stores,
};

#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Database repositories.
    pub repos: Repos,
    /// In-process ephemeral stores.
    pub stores: Stores,
    /// Email sender.
    pub email: Arc<dyn EmailSender>,
    /// Session token signer.
    pub tokens: TokenService,
}
