//! URL 验证模块
//!
//! 只做语法检查：必须是带 scheme 的绝对 URI。

use url::Url;

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 验证 URL 是否为语法合法的绝对 URI
///
/// Relative references ("not-a-url", "/path"), characters outside the
/// RFC 3986 set and incomplete `%` escapes are rejected. Any scheme is
/// accepted.
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    if url.trim().is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    if url.chars().any(char::is_whitespace) {
        return Err(UrlValidationError::InvalidFormat(
            "URL must not contain whitespace".to_string(),
        ));
    }

    if let Some(c) = url.chars().find(|c| !is_uri_char(*c)) {
        return Err(UrlValidationError::InvalidFormat(format!(
            "character '{}' is not allowed in a URI",
            c
        )));
    }

    check_percent_escapes(url)?;

    Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    Ok(())
}

/// RFC 3986 字符集：unreserved + reserved + '%'
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~' | ':' | '/' | '?' | '#' | '[' | ']' | '@' | '!' | '$' | '&'
                | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '%'
        )
}

/// 每个 '%' 后必须跟两位十六进制数字
fn check_percent_escapes(url: &str) -> Result<(), UrlValidationError> {
    let bytes = url.as_bytes();
    for (i, _) in url.match_indices('%') {
        let complete = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !complete {
            return Err(UrlValidationError::InvalidFormat(format!(
                "incomplete percent escape at position {}",
                i
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("https://example.com/path?query=1#frag").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("ftp://files.example.com/pub").is_ok());
        assert!(validate_url("mailto:someone@example.com").is_ok());
    }

    #[test]
    fn test_relative_references_rejected() {
        assert!(matches!(
            validate_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("/just/a/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_characters_outside_uri_set_rejected() {
        for bad in [
            "https://example.com/a|b",
            "https://exämple.com/ü",
            "https://example.com/<x>",
            "https://example.com/\"q\"",
            "https://example.com/{id}",
            "https://example.com/a\\b",
        ] {
            assert!(
                matches!(validate_url(bad), Err(UrlValidationError::InvalidFormat(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_percent_escapes() {
        assert!(validate_url("https://example.com/a%20b").is_ok());
        assert!(validate_url("https://example.com/%E4%BD%A0").is_ok());

        for bad in [
            "https://example.com/%zz",
            "https://example.com/%4",
            "https://example.com/%",
            "https://example.com/%g1",
        ] {
            assert!(
                matches!(validate_url(bad), Err(UrlValidationError::InvalidFormat(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(matches!(
            validate_url("https://exa mple.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url(" https://example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(validate_url(""), Err(UrlValidationError::EmptyUrl));
        assert_eq!(validate_url("   "), Err(UrlValidationError::EmptyUrl));
    }
}
