//! Masking of personal data before it reaches the logs.

const VISIBLE_CHARS: usize = 3;

/// Keep the first few characters of `value` and hide the rest.
fn mask_prefix(value: &str) -> String {
    let visible: String = value.chars().take(VISIBLE_CHARS).collect();
    format!("{}***", visible)
}

/// Mask an email address for safe logging, keeping the domain.
///
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", mask_prefix(local), domain),
        None => mask_prefix(email),
    }
}
