use anyhow::{Context, Result};

use crate::navigate::Browser;

/// Navigation primitive backed by the user's default browser
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    /// Hand a URL to the default browser
    ///
    /// # Errors
    /// Returns error if the browser cannot be opened (e.g., no browser available)
    fn assign(&self, url: &str) -> Result<()> {
        webbrowser::open(url)
            .with_context(|| format!("Failed to open browser for URL: {}", url))?;
        Ok(())
    }
}
