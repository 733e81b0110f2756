use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::summarizer::{Lookup, Summarizer};

use super::models::{ErrorResponse, FandomParams, SummaryResponse};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: String) -> ApiError {
    (status, Json(ErrorResponse { error }))
}

pub async fn home_handler() -> &'static str {
    "Hello, World!"
}

pub async fn fandom_handler(
    State(summarizer): State<Arc<Summarizer>>,
    Query(params): Query<FandomParams>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        tracing::debug!("no query provided");
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "No query provided".to_string(),
        ));
    }

    tracing::debug!("received query: {query}");

    match summarizer.lookup(&query).await {
        Ok(Lookup::Found(summary)) => Ok(Json(summary.into())),
        Ok(Lookup::NoSearchMatch | Lookup::NoPageContent) => Err(api_error(
            StatusCode::NOT_FOUND,
            format!("No results found for \"{query}\". Try another query!"),
        )),
        Err(e) => {
            tracing::error!("lookup for {query:?} failed: {e}");
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
