use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub version: u32,
    #[serde(default)]
    pub account_id: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            version: 1,
            account_id: None,
        }
    }

    /// Set the stored account id, replacing any previous one
    pub fn set_account(&mut self, account_id: String) {
        self.account_id = Some(account_id);
    }

    /// Clear the stored account id
    pub fn clear_account(&mut self) {
        self.account_id = None;
    }
}
