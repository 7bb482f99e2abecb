//! HTTP handlers, one router per area.

pub mod auth;
pub mod health;
pub mod todos;
pub mod verification;
