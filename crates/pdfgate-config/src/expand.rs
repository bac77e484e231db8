//! `${VAR}` references in configuration strings.
//!
//! Required fields treat a reference to an unset variable as an error; optional
//! fields treat it as "not configured", so a config file can name the renderer
//! URL variable without requiring it at startup.

use std::borrow::Cow;

use crate::ConfigError;

/// Name of a referenced variable that is unset and has no `:-default`.
struct UnsetVar(String);

/// Substitute `${VAR}` and `${VAR:-default}` from the process environment.
///
/// Strings without `${` are borrowed unchanged, so bare `$` in URLs survives.
fn substitute(value: &str) -> Result<Cow<'_, str>, UnsetVar> {
    if !value.contains("${") {
        return Ok(Cow::Borrowed(value));
    }

    shellexpand::env_with_context(value, |name| match std::env::var(name) {
        Ok(found) => Ok(Some(found)),
        Err(_) => Err(UnsetVar(name.to_owned())),
    })
    .map_err(|e| e.cause)
}

/// Expand a required field; an unset variable is an error naming `field`.
pub(crate) fn expand_required(value: &str, field: &str) -> Result<String, ConfigError> {
    substitute(value)
        .map(Cow::into_owned)
        .map_err(|UnsetVar(name)| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{name}}} not set"),
        })
}

/// Expand an optional field; an unset variable leaves the field unset.
pub(crate) fn expand_optional(value: &str) -> Option<String> {
    substitute(value).ok().map(Cow::into_owned)
}
