use crate::config::Config;
use crate::sanitizer;
use crate::wiki::{WikiClient, WikiError};

/// Character budget for the returned summary text.
pub const SUMMARY_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub url: String,
    pub text: String,
}

/// Outcome of a single lookup. Transport and decode failures are reported
/// separately as `WikiError`; these variants cover the happy path and the
/// two recoverable misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(PageSummary),
    NoSearchMatch,
    NoPageContent,
}

/// Runs the whole pipeline for one query: resolve the canonical title,
/// fetch the page markup, sanitize and truncate.
pub struct Summarizer {
    wiki: WikiClient,
    page_base_url: String,
}

impl Summarizer {
    pub fn new(config: &Config) -> Summarizer {
        Summarizer {
            wiki: WikiClient::new(config.api_url.clone()),
            page_base_url: config.page_base_url.clone(),
        }
    }

    pub async fn lookup(&self, query: &str) -> Result<Lookup, WikiError> {
        let Some(title) = self.wiki.resolve_title(query).await? else {
            log::debug!("no search results for query: {query}");
            return Ok(Lookup::NoSearchMatch);
        };

        let Some(html) = self.wiki.fetch_page_html(&title).await? else {
            log::debug!("no page content for title: {title}");
            return Ok(Lookup::NoPageContent);
        };

        let text = sanitizer::strip_markup(&html);
        let text = sanitizer::truncate_chars(&text, SUMMARY_MAX_CHARS);
        let url = page_url(&self.page_base_url, &title);
        log::debug!("page found: {title}");
        Ok(Lookup::Found(PageSummary { title, url, text }))
    }
}

/// Public page URL for a canonical title: spaces become underscores under
/// the configured base path.
pub fn page_url(base: &str, title: &str) -> String {
    format!("{}/{}", base, title.replace(' ', "_"))
}
