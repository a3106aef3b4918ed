//! Environment variable expansion for configuration strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::ConfigError;

/// `${NAME}` or `${NAME:-default}` reference.
static VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[A-Za-z_][A-Za-z0-9_]*(?::-[^}]*)?\}").unwrap());

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// An unset variable without a default is an error naming the config field.
/// Bare `$VAR` is left untouched so that literal dollar signs in URLs survive,
/// also when the same string holds braced references.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut out = String::with_capacity(value.len());
    let mut last = 0;
    for reference in VAR_RE.find_iter(value) {
        out.push_str(&value[last..reference.start()]);
        let expanded = shellexpand::env_with_context(reference.as_str(), lookup).map_err(|e| {
            ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} not set", e.var_name),
            }
        })?;
        out.push_str(&expanded);
        last = reference.end();
    }
    out.push_str(&value[last..]);

    Ok(out)
}

/// Look up a variable, treating "unset" as an error so `${VAR}` fails loudly.
fn lookup(var: &str) -> Result<Option<String>, UnsetVar> {
    std::env::var(var).map(Some).map_err(|_| UnsetVar)
}

/// Marker error for a variable missing from the environment.
#[derive(Debug)]
struct UnsetVar;
