use crate::error::{FetchError, Result};

/// Rejects URLs that cannot possibly be fetched before any attempt is spent.
///
/// Only `http` and `https` are accepted, and something must follow the scheme.
///
/// # Examples
///
/// ```
/// use dexview_fetch::core::validate_url;
///
/// assert!(validate_url("https://pokeapi.co/api/v2/pokemon/pikachu").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// assert!(validate_url("https://").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| FetchError::InvalidUrl(url.to_string()))?;

    if rest.is_empty() || rest.starts_with('/') || rest.chars().any(char::is_whitespace) {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }

    Ok(())
}
