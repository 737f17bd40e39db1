use serde_json::{Map, Value};

/// Reads typed values out of a plugin configuration map.
///
/// String lookups fall back to an environment variable and then to a default,
/// so secrets can stay out of the configuration file.
pub struct ConfigParser<'a> {
    raw: &'a Map<String, Value>,
    env: fn(&str) -> Option<String>,
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl<'a> ConfigParser<'a> {
    #[must_use]
    pub fn new(raw: &'a Map<String, Value>) -> Self {
        Self::with_env(raw, process_env)
    }

    /// Use `env` instead of the process environment for fallbacks.
    #[must_use]
    pub fn with_env(raw: &'a Map<String, Value>, env: fn(&str) -> Option<String>) -> Self {
        Self { raw, env }
    }

    /// Returns the value at `key`, else `env_var` (if non-empty and set),
    /// else `default`. Empty strings count as unset at every step.
    #[must_use]
    pub fn get_string(&self, key: &str, env_var: &str, default: &str) -> String {
        if let Some(value) = self.raw.get(key).and_then(scalar_to_string)
            && !value.is_empty()
        {
            return value;
        }
        if !env_var.is_empty()
            && let Some(value) = (self.env)(env_var)
            && !value.is_empty()
        {
            return value;
        }
        default.to_string()
    }

    /// Accepts JSON booleans and the usual textual spellings.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.raw.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" => false,
                _ => default,
            },
            _ => default,
        }
    }

    /// Accepts an array of scalars or a comma-separated string.
    ///
    /// Array elements are kept verbatim (including empty ones) so callers can
    /// report exactly which element is malformed.
    #[must_use]
    pub fn get_string_slice(&self, key: &str) -> Vec<String> {
        match self.raw.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(Value::String(s)) => s
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
