use crate::cli::Args;

/// Stackalytics instance queried when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://stackalytics.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Stackalytics instance, without trailing slash
    pub base_url: String,
    /// Release to filter by; the server picks the current one when unset
    pub release: Option<String>,
}

impl Config {
    /// Load `.env` into the process environment, if present
    ///
    /// Must run before argument parsing so env-backed flags can see it.
    pub fn load_dotenv() {
        dotenvy::dotenv().ok();
    }

    pub fn from_args(args: &Args) -> Self {
        Self {
            base_url: args.base_url.trim_end_matches('/').to_string(),
            release: args
                .release
                .as_deref()
                .map(str::trim)
                .filter(|release| !release.is_empty())
                .map(str::to_string),
        }
    }
}
