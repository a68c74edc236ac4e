use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

static LONG_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9]{40,}").expect("valid regex"));
static TOKEN_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)token=[^&\s]+").expect("valid regex"));
static BEARER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Bearer\s+[a-zA-Z0-9._-]+").expect("valid regex"));

/// Redacts anything that looks like a credential from an error message
/// before it reaches logs or the status banner.
///
/// Pattern based: long alphanumeric runs, `token=` query values and
/// `Bearer` header values.
pub fn sanitize_message(message: &str) -> String {
    let message = LONG_TOKEN.replace_all(message, "[REDACTED]");
    let message = TOKEN_PARAM.replace_all(&message, "token=[REDACTED]");
    let message = BEARER.replace_all(&message, "Bearer [REDACTED]");
    message.into_owned()
}

pub fn sanitize_error<E: Display + ?Sized>(error: &E) -> String {
    sanitize_message(&error.to_string())
}
