//! Credential Resolution
//!
//! Resolves a usable API key for a provider family: a caller-supplied
//! override wins over the process-wide environment default. Keys are never
//! cached or validated here; validity is discovered on first use.

use super::provider::missing_credential_error;
use super::types::{ApiKeyOverrides, LlmResult, ProviderFamily};

/// Resolve the secret for a provider family.
///
/// Empty strings from either source count as absent. Fails with
/// `MissingCredential` naming the provider when neither source yields a key.
pub fn resolve_credential(
    family: ProviderFamily,
    overrides: Option<&ApiKeyOverrides>,
) -> LlmResult<String> {
    resolve_with_env(family, overrides, |var| std::env::var(var).ok())
}

/// Resolution with an injectable environment source, for test isolation.
pub fn resolve_with_env<F>(
    family: ProviderFamily,
    overrides: Option<&ApiKeyOverrides>,
    env: F,
) -> LlmResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = overrides.and_then(|o| o.for_family(family)) {
        return Ok(key.to_string());
    }

    env(family.env_var())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| missing_credential_error(&family.to_string()))
}
