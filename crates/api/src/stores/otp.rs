//! In-memory one-time code store.
//!
//! Each identifier (an email address) holds at most one live code. Issuing a
//! new code replaces the previous one, a successful verification consumes it,
//! and every issuance arms a one-shot timer that removes the entry once its
//! deadline passes.
//!
//! Entries carry a generation stamp. The expiry timer only removes the entry it
//! was armed for, so a timer left over from a superseded code never deletes the
//! newer code occupying the same slot. Expired entries are also rejected at
//! verification time, so a late timer never extends a code's lifetime.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;

use anyhow::Result;
use dashmap::DashMap;
use rand::Rng;
use tokio::time::Instant;

/// Number of digits in an issued code.
pub const CODE_LEN: usize = 6;

const CODE_SPACE: u32 = 1_000_000;

/// Store for short-lived, single-use verification codes.
#[cfg_attr(test, mockall::automock)]
pub trait OtpStore: Send + Sync {
    /// Issue a fresh code for `identifier`, valid for `ttl`.
    /// Any code previously issued for the identifier stops working immediately.
    fn issue(&self, identifier: &str, ttl: Duration) -> Result<String>;

    /// Check `code` against the live code for `identifier`, consuming it on a match.
    ///
    /// Unknown identifiers, expired or consumed codes and wrong codes all
    /// return `false`. A wrong code leaves the pending code in place.
    fn verify(&self, identifier: &str, code: &str) -> bool;
}

#[derive(Debug)]
struct Entry {
    code: String,
    expires_at: Instant,
    generation: u64,
}

/// Process-local implementation of [`OtpStore`].
///
/// Must be used from within a Tokio runtime: issuance spawns the expiry task.
#[derive(Clone, Default)]
pub struct MemoryOtpStore {
    entries: Arc<DashMap<String, Entry>>,
    generation: Arc<AtomicU64>,
}

impl MemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries physically present, including expired ones whose
    /// timer has not fired yet.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn arm_expiry(&self, identifier: String, generation: u64, expires_at: Instant) {
        let entries = Arc::clone(&self.entries);

        tokio::spawn(async move {
            tokio::time::sleep_until(expires_at).await;

            // Consumed or superseded entries make this a no-op
            if entries
                .remove_if(&identifier, |_, entry| entry.generation == generation)
                .is_some()
            {
                tracing::debug!(identifier = %identifier, "verification code expired");
            }
        });
    }
}

impl OtpStore for MemoryOtpStore {
    fn issue(&self, identifier: &str, ttl: Duration) -> Result<String> {
        if identifier.is_empty() {
            anyhow::bail!("cannot issue a code for an empty identifier");
        }
        if ttl.is_zero() {
            anyhow::bail!("code ttl must be positive");
        }

        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| anyhow::anyhow!("code ttl {ttl:?} is out of range"))?;
        let code = generate_code();
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;

        self.entries.insert(
            identifier.to_owned(),
            Entry {
                code: code.clone(),
                expires_at,
                generation,
            },
        );

        self.arm_expiry(identifier.to_owned(), generation, expires_at);

        Ok(code)
    }

    fn verify(&self, identifier: &str, code: &str) -> bool {
        let now = Instant::now();

        // Lookup, comparison and removal happen under the same shard lock
        self.entries
            .remove_if(identifier, |_, entry| {
                now < entry.expires_at && entry.code.as_bytes() == code.as_bytes()
            })
            .is_some()
    }
}

/// Generate a uniformly random code in `000000..=999999`.
pub fn generate_code() -> String {
    format_code(rand::rng().random_range(0..CODE_SPACE))
}

fn format_code(value: u32) -> String {
    format!("{:0width$}", value, width = CODE_LEN)
}
