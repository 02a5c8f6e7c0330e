//! Configuration loading and resolution.
//!
//! Every setting resolves as: explicit CLI value, then environment, then default.

use crate::types::{McpError, McpResult};

/// Environment variable holding a generation seed.
pub const SEED_ENV: &str = "MOCK_DATA_SEED";
/// Environment variable holding the HTTP bearer token.
pub const TOKEN_ENV: &str = "MOCK_DATA_TOKEN";
/// Default HTTP listen address.
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3100";

/// Resolve the generation seed.
pub fn resolve_seed(explicit: Option<u64>) -> McpResult<Option<u64>> {
    if explicit.is_some() {
        return Ok(explicit);
    }

    match std::env::var(SEED_ENV) {
        Ok(raw) => parse_seed(&raw).map(Some),
        Err(_) => Ok(None),
    }
}

/// Parse a seed value, rejecting anything that is not a `u64`.
pub fn parse_seed(raw: &str) -> McpResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| McpError::Config(format!("{SEED_ENV} must be an unsigned integer, got {raw:?}")))
}

/// Resolve the HTTP bearer token.
pub fn resolve_token(explicit: Option<String>) -> Option<String> {
    explicit
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_seed_wins() {
        assert_eq!(resolve_seed(Some(5)).unwrap(), Some(5));
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
        let err = parse_seed("forty-two").unwrap_err();
        assert!(err.to_string().contains(SEED_ENV));
        assert!(parse_seed("-1").is_err());
    }

    #[test]
    fn test_explicit_token_wins() {
        assert_eq!(resolve_token(Some("abc".into())), Some("abc".to_string()));
        assert_eq!(resolve_token(Some(String::new())), None);
    }
}
