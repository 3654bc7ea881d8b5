use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Named shortcuts mapping an alias to a full URL
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl Config {
    /// Resolve a navigation target: an alias name maps to its configured URL,
    /// anything else passes through verbatim.
    pub fn resolve_target(&self, target: &str) -> String {
        match self.aliases.get(target) {
            Some(url) => url.clone(),
            None => target.to_string(),
        }
    }
}
