use serde::Deserialize;

/// Failures talking to the upstream wiki. Both kinds surface to the caller
/// as a 500 with the display string as the message.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered, but the body was not the JSON shape we expect.
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

/// Client for a MediaWiki-compatible api.php endpoint.
///
/// Holds a single `reqwest::Client`; outbound calls inherit the transport's
/// default timeouts and are never retried.
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: reqwest::Client,
    api_url: String,
}

impl WikiClient {
    pub fn new(api_url: String) -> WikiClient {
        WikiClient {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Search the wiki for `query` and return the first hit's canonical
    /// title, or `None` when the search comes back empty.
    pub async fn resolve_title(&self, query: &str) -> Result<Option<String>, WikiError> {
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("list", "search"),
            ("srsearch", query),
        ];
        let body = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?
            .text()
            .await?;

        let envelope: SearchEnvelope = serde_json::from_str(&body)
            .map_err(|e| WikiError::Malformed(format!("search response: {e}")))?;

        log::debug!(
            "search for {query:?} returned {} results",
            envelope.query.search.len()
        );
        Ok(envelope.query.search.into_iter().next().map(|hit| hit.title))
    }

    /// Fetch the rendered lead-section HTML for an exact page title, or
    /// `None` when the parse response carries no content.
    pub async fn fetch_page_html(&self, title: &str) -> Result<Option<String>, WikiError> {
        let params = [
            ("action", "parse"),
            ("format", "json"),
            ("page", title),
            ("prop", "text"),
            ("section", "0"),
        ];
        let body = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?
            .text()
            .await?;

        let envelope: ParseEnvelope = serde_json::from_str(&body)
            .map_err(|e| WikiError::Malformed(format!("parse response: {e}")))?;

        let html = envelope.parse.text.html.filter(|h| !h.is_empty());
        log::debug!(
            "page {title:?} returned {} bytes of markup",
            html.as_deref().map_or(0, str::len)
        );
        Ok(html)
    }
}

// Typed mirrors of the two upstream JSON shapes. The upstream omits whole
// subtrees on misses (and on errors), so every level defaults to empty.

#[derive(Debug, Default, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    query: SearchBody,
}

#[derive(Debug, Default, Deserialize)]
struct SearchBody {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct ParseEnvelope {
    #[serde(default)]
    parse: ParseBody,
}

#[derive(Debug, Default, Deserialize)]
struct ParseBody {
    #[serde(default)]
    text: ParseText,
}

#[derive(Debug, Default, Deserialize)]
struct ParseText {
    #[serde(rename = "*")]
    html: Option<String>,
}
