//! Client configuration.
//!
//! `ClientConfig` controls how the underlying HTTP client handle is built:
//! identity (user agent), redirect policy, cookie handling and transparent
//! content decoding. None of this is per request; literal header strings on a
//! [`Request`](crate::net::Request) always win over the defaults set here.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use http_recipes::config::ClientConfig;
//! let cfg = ClientConfig::default();
//! assert!(cfg.follow_redirects);
//! assert_eq!(cfg.max_redirects, 10);
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use http_recipes::config::ClientConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ClientConfig::builder()
//!     .user_agent("my-agent/1.0")
//!     .max_redirects(3)
//!     .cookies(true)
//!     .build()?; // returns Result<ClientConfig, ClientConfigError>
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! Builder validation returns [`ClientConfigError`] when the user agent is
//! empty, or when redirects are followed with a `max_redirects` of zero.

use std::fmt;

pub const DEFAULT_USER_AGENT: &str = concat!("http-recipes/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Default `User-Agent`. `None` sends no agent unless the request sets one.
    pub user_agent: Option<String>,
    pub follow_redirects: bool,
    pub max_redirects: usize,
    /// Keep cookies between requests made through the same client handle.
    pub cookies: bool,
    /// Transparent gzip/brotli/deflate decoding of response bodies.
    pub decompress: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            follow_redirects: true,
            max_redirects: 10,
            cookies: false,
            decompress: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    inner: ClientConfig,
}

impl ClientConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut ClientConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self {
        self.map(|c| c.user_agent = Some(ua.into()))
    }
    pub fn no_user_agent(self) -> Self { self.map(|c| c.user_agent = None) }
    pub fn follow_redirects(self, on: bool) -> Self { self.map(|c| c.follow_redirects = on) }
    pub fn max_redirects(self, n: usize) -> Self { self.map(|c| c.max_redirects = n) }
    pub fn cookies(self, on: bool) -> Self { self.map(|c| c.cookies = on) }
    pub fn decompress(self, on: bool) -> Self { self.map(|c| c.decompress = on) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut ClientConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientConfigError {
    EmptyUserAgent,
    ZeroRedirects,
}

impl fmt::Display for ClientConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientConfigError::EmptyUserAgent =>
                write!(f, "user_agent must not be empty (use no_user_agent() to omit it)"),
            ClientConfigError::ZeroRedirects =>
                write!(f, "max_redirects must be at least 1 when follow_redirects is on"),
        }
    }
}
impl std::error::Error for ClientConfigError {}

pub(crate) fn validate(c: &ClientConfig) -> Result<(), ClientConfigError> {
    if c.user_agent.as_deref().is_some_and(|ua| ua.trim().is_empty()) {
        return Err(ClientConfigError::EmptyUserAgent);
    }
    if c.follow_redirects && c.max_redirects == 0 {
        return Err(ClientConfigError::ZeroRedirects);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ClientConfig::default();
        assert!(validate(&cfg).is_ok());
        assert_eq!(cfg.user_agent.as_deref(), Some(DEFAULT_USER_AGENT));
        assert!(!cfg.cookies);
    }

    #[test]
    fn builder_applies_changes() {
        let cfg = ClientConfig::builder()
            .user_agent("agent/2")
            .follow_redirects(false)
            .max_redirects(0)
            .cookies(true)
            .decompress(false)
            .build()
            .unwrap();

        assert_eq!(cfg.user_agent.as_deref(), Some("agent/2"));
        assert!(!cfg.follow_redirects);
        assert!(cfg.cookies);
        assert!(!cfg.decompress);
    }

    #[test]
    fn with_applies_several_changes_and_still_validates() {
        let cfg = ClientConfig::builder()
            .with(|c| {
                c.cookies = true;
                c.max_redirects = 3;
            })
            .build()
            .unwrap();
        assert!(cfg.cookies);
        assert_eq!(cfg.max_redirects, 3);

        let err = ClientConfig::builder()
            .with(|c| c.user_agent = Some(String::new()))
            .build()
            .unwrap_err();
        assert_eq!(err, ClientConfigError::EmptyUserAgent);
    }

    #[test]
    fn zero_redirects_rejected_when_following() {
        let err = ClientConfig::builder().max_redirects(0).build().unwrap_err();
        assert_eq!(err, ClientConfigError::ZeroRedirects);
    }

    #[test]
    fn blank_user_agent_rejected() {
        let err = ClientConfig::builder().user_agent("  ").build().unwrap_err();
        assert_eq!(err, ClientConfigError::EmptyUserAgent);

        let cfg = ClientConfig::builder().no_user_agent().build().unwrap();
        assert!(cfg.user_agent.is_none());
    }
}
