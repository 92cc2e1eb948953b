//! Process configuration read from the environment at start-up.

/// Settings for the HTTP layer and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix under which routes are mounted, always starting and ending with `/`.
    pub base_path: String,
    /// Verbose logging.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Read `BASE_URL` and `DEBUG` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_path = lookup("BASE_URL")
            .map(|b| normalize_base_path(&b))
            .unwrap_or_else(|| "/".to_string());
        let debug = lookup("DEBUG").map(|d| is_truthy(&d)).unwrap_or(false);
        Self { base_path, debug }
    }

    /// The tracing filter directive matching [`Config::debug`].
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// `1`, `true` and `yes` in any case.
pub fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Make sure a mount prefix starts and ends with a single `/`.
pub fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), Config::default());
        assert_eq!(Config::default().log_level(), "info");
    }

    #[test]
    fn test_debug_truthy_values() {
        for v in ["1", "true", "TRUE", "Yes", "yes"] {
            assert!(config(&[("DEBUG", v)]).debug, "{v}");
        }
        for v in ["0", "false", "no", "on", "", " true"] {
            assert!(!config(&[("DEBUG", v)]).debug, "{v}");
        }
        assert_eq!(config(&[("DEBUG", "1")]).log_level(), "debug");
    }

    #[test]
    fn test_base_path_normalization() {
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("bib"), "/bib/");
        assert_eq!(normalize_base_path("/bib"), "/bib/");
        assert_eq!(normalize_base_path("/tools/bib/"), "/tools/bib/");
        assert_eq!(config(&[("BASE_URL", "/refs")]).base_path, "/refs/");
    }
}
