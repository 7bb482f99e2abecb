//! Terminal UI helpers for consistent colored output.

use std::future::Future;
use std::io::{Write, stdin, stdout};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Print a success message with green checkmark.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an info message with blue info icon.
pub fn info(msg: &str) {
    eprintln!("{} {}", "ℹ".blue(), msg);
}

fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

fn hint(msg: &str) {
    eprintln!("  {} {}", "→".dimmed(), msg.dimmed());
}

/// Format a value as bold (for IDs, emails, etc.).
pub fn bold(s: &str) -> String {
    s.bold().to_string()
}

/// Format a value as dimmed (for secondary details).
pub fn dim(s: &str) -> String {
    s.dimmed().to_string()
}

/// Run an async operation with a spinner showing the given message.
pub async fn spin<T, F: Future<Output = T>>(msg: &str, fut: F) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.dim} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let result = fut.await;

    spinner.finish_and_clear();
    result
}

/// Suggestion for a failed command, keyed on the error text.
fn hint_for(msg: &str) -> Option<&'static str> {
    let lower = msg.to_lowercase();

    if lower.contains("not signed in") || lower.contains("session expired") {
        // Message already says what to run
        None
    } else if lower.contains("invalid or expired code") {
        Some("Codes expire after a few minutes. Run: todo verify")
    } else if lower.contains("invalid credentials") {
        Some("Check your email and password, or create an account: todo signup <email>")
    } else if lower.contains("email already registered") {
        Some("Sign in instead: todo login <email>")
    } else if lower.contains("todo not found") {
        Some("List your todos with: todo todos list")
    } else if lower.contains("invalid id format") || lower.contains("invalid todo id") {
        Some("Todo IDs are the UUIDs shown by: todo todos list")
    } else if lower.contains("connection")
        || lower.contains("dns")
        || lower.contains("timeout")
        || lower.contains("network")
        || lower.contains("no such host")
        || lower.contains("resolve")
    {
        Some("Is the server running? Set TODO_API_URL to point at it.")
    } else {
        None
    }
}

/// Display an error with contextual hints based on the error message.
pub fn print_error(err: &anyhow::Error) {
    let msg = err.to_string();
    error(&msg);

    if let Some(suggestion) = hint_for(&msg) {
        hint(suggestion);
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    stdout().flush()?;

    let mut line = String::new();
    stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a password. Input is echoed.
pub fn prompt_password() -> Result<String> {
    let password = prompt("Password: ")?;

    if password.is_empty() {
        anyhow::bail!("No password entered.");
    }

    Ok(password)
}

/// Prompt the user for a verification code sent to their email.
pub fn prompt_code() -> Result<String> {
    println!("Code sent to your email.");
    let code = prompt("Code: ")?;

    if code.is_empty() {
        anyhow::bail!("No code entered. Check your email for the 6-digit code.");
    }

    Ok(code)
}
