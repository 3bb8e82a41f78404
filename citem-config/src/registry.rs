use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Whether registering an identifier twice replaces the earlier item instead of failing.
    pub allow_replace: bool,
    /// Whether registration builds one item through the default factory and checks its tag.
    pub verify_factory: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allow_replace: false,
            verify_factory: true,
        }
    }
}
