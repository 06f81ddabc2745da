//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a string environment variable, falling back to `default` when unset
/// or empty.
pub fn env_string_with_default(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_value() {
        let var_name = "LAUNCHTRACK_TEST_PARSE_VALID_41913";
        unsafe { std::env::set_var(var_name, "8080") };
        let result: u16 = env_parse_with_default(var_name, 3000);
        assert_eq!(result, 8080);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn parse_invalid_value_falls_back() {
        let var_name = "LAUNCHTRACK_TEST_PARSE_INVALID_41914";
        unsafe { std::env::set_var(var_name, "not-a-port") };
        let result: u16 = env_parse_with_default(var_name, 3000);
        assert_eq!(result, 3000);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn parse_missing_var_falls_back() {
        let var_name = "LAUNCHTRACK_TEST_PARSE_MISSING_41915";
        unsafe { std::env::remove_var(var_name) };
        let result: u16 = env_parse_with_default(var_name, 3000);
        assert_eq!(result, 3000);
    }

    #[test]
    fn string_empty_value_falls_back() {
        let var_name = "LAUNCHTRACK_TEST_STRING_EMPTY_41916";
        unsafe { std::env::set_var(var_name, "  ") };
        assert_eq!(env_string_with_default(var_name, "127.0.0.1"), "127.0.0.1");
        unsafe { std::env::remove_var(var_name) };
    }
}
