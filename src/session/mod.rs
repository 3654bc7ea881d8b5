pub mod storage;
pub mod types;

use crate::navigate::AccountSource;
use self::types::SessionState;

/// Environment variable name for overriding the account id without a session file
pub const ENV_ACCOUNT_VAR: &str = "ACCTNAV_ACCOUNT_ID";

/// Check for an account id in the ACCTNAV_ACCOUNT_ID environment variable.
/// Returns Some(id) if the env var is set and non-empty, None otherwise.
pub fn get_account_from_env() -> Option<String> {
    match std::env::var(ENV_ACCOUNT_VAR) {
        Ok(val) => {
            let trimmed = val.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

/// Resolve the effective account id for a navigation.
/// Precedence: explicit CLI override, then environment, then stored state.
pub fn resolve_account(cli_override: Option<String>, state: &SessionState) -> Option<String> {
    cli_override
        .or_else(get_account_from_env)
        .or_else(|| state.account_id.clone())
}

/// Account source over an already-resolved account id
pub struct ResolvedAccount(pub Option<String>);

impl AccountSource for ResolvedAccount {
    fn account_id(&self) -> Option<String> {
        self.0.clone()
    }
}
