/// Key on the host's global namespace where the bridge object is expected.
pub const DEFAULT_GLOBAL_KEY: &str = "termbridge";

/// Environment variable overriding [`DEFAULT_GLOBAL_KEY`].
pub const GLOBAL_KEY_ENV: &str = "TERMBRIDGE_GLOBAL_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub global_key: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            global_key: DEFAULT_GLOBAL_KEY.to_string(),
        }
    }
}

impl BridgeConfig {
    pub fn new(global_key: impl Into<String>) -> Self {
        Self {
            global_key: global_key.into(),
        }
    }

    /// Reads [`GLOBAL_KEY_ENV`]. On `wasm32-unknown-unknown` there is no
    /// process environment, so this always yields the default there; browser
    /// hosts pick a different key with `install` instead.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(GLOBAL_KEY_ENV) {
            Some(key) if !key.trim().is_empty() => Self::new(key.trim()),
            _ => Self::default(),
        }
    }
}
