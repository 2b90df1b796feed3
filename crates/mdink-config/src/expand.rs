//! Environment variable expansion in configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration field in error messages. Strings without
/// `${` are returned unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(expand_env("github", "render.code_theme").unwrap(), "github");
    }

    #[test]
    fn test_bare_dollar_kept() {
        assert_eq!(expand_env("$notavar", "render.font_family").unwrap(), "$notavar");
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = expand_env("${MDINK_TEST_SURELY_UNSET:-serif}", "render.font_family").unwrap();
        assert_eq!(value, "serif");
    }

    #[test]
    fn test_unset_variable_is_error() {
        let err = expand_env("${MDINK_TEST_SURELY_UNSET}", "theme.file").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable error in theme.file: ${MDINK_TEST_SURELY_UNSET} not set"
        );
    }
}
