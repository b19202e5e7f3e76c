//! `[social]` configuration.
//!
//! Identifies the account used for share links. The handle is inserted
//! unescaped into intent URLs, so validation restricts it to the identifier
//! alphabet the platform itself allows.

use crate::config::types::{ConfigDiagnostics, fields};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Account handle for the `via` parameter, without the leading `@`.
    pub handle: String,

    /// Host of the share intent endpoint.
    pub domain: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            handle: String::new(),
            domain: "twitter.com".into(),
        }
    }
}

impl SocialConfig {
    /// Validate social configuration.
    ///
    /// # Checks
    /// - `handle` contains only `[A-Za-z0-9_]` (it is emitted unescaped)
    /// - `domain` is a bare host, no scheme or path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self
            .handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            diag.error_with_hint(
                fields::SOCIAL_HANDLE,
                format!("handle '{}' contains characters outside [A-Za-z0-9_]", self.handle),
                "use the account name without '@', e.g. \"someuser\"",
            );
        }

        if self.domain.is_empty() || self.domain.contains('/') || self.domain.contains(':') {
            diag.error_with_hint(
                fields::SOCIAL_DOMAIN,
                format!("domain '{}' must be a bare host", self.domain),
                "use format like \"twitter.com\"",
            );
        }
    }
}
