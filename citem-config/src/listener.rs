use serde::{Deserialize, Serialize};

/// Priority the custom item listener subscribes with.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListenerPriority {
    Highest,
    High,
    #[default]
    Normal,
    Low,
    Lowest,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListenerConfig {
    pub priority: ListenerPriority,
}
