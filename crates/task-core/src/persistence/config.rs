//! Storage key configuration.

/// Key names used in the key-value store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceConfig {
    /// Key holding the JSON task array
    pub tasks_key: String,
    /// Key holding the JSON theme boolean
    pub theme_key: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            tasks_key: "todos".to_string(),
            theme_key: "darkMode".to_string(),
        }
    }
}
