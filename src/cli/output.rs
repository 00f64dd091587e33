//! Terminal output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, created keys
//! - Yellow: warnings, updated keys
//! - Red: errors, missing keys
//! - Cyan: key names, hints
//! - Dimmed: secondary info

use std::fmt::Display;

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Apply `style` unless colors are disabled.
fn paint(text: &str, style: fn(&str) -> ColoredString) -> String {
    if colors_enabled() {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// `✓ synced 2 variables`
pub fn success(msg: &str) {
    println!("{} {}", paint("✓", |s| s.green()), msg);
}

/// `✗ VERCEL_TOKEN is not set` on stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", paint("✗", |s| s.red()), msg);
}

/// `⚠ NEXT_PUBLIC_BACKEND_URL is missing`
pub fn warn(msg: &str) {
    println!("{} {}", paint("⚠", |s| s.yellow()), msg);
}

/// `→ run: envsync check` on stderr, so it follows the error it explains.
pub fn hint(msg: &str) {
    eprintln!("{} {}", paint("→", |s| s.cyan()), paint(msg, |s| s.cyan()));
}

/// Label dimmed, value bold.
pub fn kv(label: &str, value: impl Display) {
    let value = value.to_string();
    println!(
        "  {:<12} {}",
        paint(label, |s| s.dimmed()),
        paint(&value, |s| s.bold())
    );
}

/// `  • text`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// A key name in cyan.
pub fn key(k: &str) -> String {
    paint(k, |s| s.cyan())
}

/// A dimmed line.
pub fn dimmed(msg: &str) {
    println!("{}", paint(msg, |s| s.dimmed()));
}

/// Bold title over a rule.
pub fn section(title: &str) {
    println!();
    println!("{}", paint(title, |s| s.bold()));
    println!("{}", paint(&"─".repeat(RULE_WIDTH), |s| s.dimmed()));
}

/// Print a value as pretty JSON.
pub fn json<T: serde::Serialize>(value: &T) -> crate::error::Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| crate::error::Error::Other(format!("failed to render JSON: {}", e)))?;
    println!("{}", text);
    Ok(())
}
