use serde::{Deserialize, Serialize};

use crate::summarizer::PageSummary;

#[derive(Debug, Deserialize)]
pub struct FandomParams {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub title: String,
    pub url: String,
    pub text: String,
}

impl From<PageSummary> for SummaryResponse {
    fn from(summary: PageSummary) -> SummaryResponse {
        SummaryResponse {
            title: summary.title,
            url: summary.url,
            text: summary.text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
