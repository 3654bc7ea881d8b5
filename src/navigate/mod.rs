use anyhow::Result;

/// Query parameter name used to carry the account id on navigation targets
pub const ACCOUNT_PARAM: &str = "accountid";

/// Read-only access to the current session's account id
///
/// Implementations must be side-effect free and safe to call repeatedly;
/// the navigator queries this once per navigation.
pub trait AccountSource {
    fn account_id(&self) -> Option<String>;
}

/// Host-provided navigation primitive
///
/// `assign` hands the URL to the host (browser) and is fire-and-forget:
/// once it succeeds there is no way to recall the navigation.
pub trait Browser {
    fn assign(&self, url: &str) -> Result<()>;
}

/// Compute the navigation target for a URL and an optional account id
///
/// Appends `accountid=<id>` with `?` or `&` depending on whether the URL
/// already carries a query string. The id is appended verbatim, without
/// percent-encoding.
pub fn append_account_param(url: &str, account_id: Option<&str>) -> String {
    match account_id {
        None => url.to_string(),
        Some(id) => {
            let separator = if url.contains('?') { '&' } else { '?' };
            format!("{}{}{}={}", url, separator, ACCOUNT_PARAM, id)
        }
    }
}

/// Navigates to URLs with the current account id attached
///
/// The account source and browser are injected so tests can substitute
/// doubles for both collaborators.
pub struct Navigator<'a> {
    session: &'a dyn AccountSource,
    browser: &'a dyn Browser,
}

impl<'a> Navigator<'a> {
    pub fn new(session: &'a dyn AccountSource, browser: &'a dyn Browser) -> Self {
        Self { session, browser }
    }

    /// Navigate to `url`, including the account id param if available
    ///
    /// Returns `true` if the navigation was handed off, `false` otherwise.
    /// In a host where navigation unloads the running context this call may
    /// never return on success; callers should not rely on code after it
    /// executing. No error escapes: failures are reported on stderr and
    /// collapse into the `false` return.
    pub fn navigate(&self, url: &str) -> bool {
        match self.try_navigate(url) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Error navigating: {}", e);
                false
            }
        }
    }

    fn try_navigate(&self, url: &str) -> Result<()> {
        if url.is_empty() {
            anyhow::bail!("empty URL");
        }

        let account_id = self.session.account_id();
        let target = append_account_param(url, account_id.as_deref());

        // URL is assumed reachable; no network check before hand-off
        self.browser.assign(&target)?;

        Ok(())
    }
}
