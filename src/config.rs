use dotenvy::dotenv;
use std::env;

pub const DEFAULT_API_URL: &str = "https://phasmophobia.fandom.com/api.php";
pub const DEFAULT_PAGE_URL: &str = "https://phasmophobia.fandom.com/wiki";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Upstream MediaWiki api.php endpoint.
    pub api_url: String,
    /// Base path public page URLs are derived from.
    pub page_base_url: String,
}

impl Config {
    /// Build the runtime configuration once at startup and pass it down.
    /// Every key has a default, so a bare environment works.
    pub fn from_env() -> Config {
        dotenv().ok(); // Load .env file if present
        Config {
            bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:5000"),
            api_url: get_env_or_default("WIKI_API_URL", DEFAULT_API_URL),
            page_base_url: get_env_or_default("WIKI_PAGE_URL", DEFAULT_PAGE_URL),
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
