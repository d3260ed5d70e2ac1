//! # Knowledge Base Route Handlers
//!
//! Direct access to the knowledge base: ranked search and lookup by id. Neither endpoint
//! calls the model.

use super::{AppError, AppState};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use formaid::{
    constants::{DEFAULT_KNOWLEDGE_SEARCH_LIMIT, MAX_KNOWLEDGE_SEARCH_LIMIT},
    knowledge::search,
    Category, KnowledgeEntry,
};
use serde::{Deserialize, Serialize};
use tracing::info;

// --- API Payloads for Knowledge Base ---

#[derive(Deserialize, Debug)]
pub struct KnowledgeSearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Serialize, Debug)]
pub struct KnowledgeHit {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub content: String,
    pub score: f64,
}

#[derive(Serialize, Debug)]
pub struct KnowledgeSearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<KnowledgeHit>,
}

// --- Knowledge Base Handlers ---

/// Handler for `GET /support-chat/knowledge?q=&limit=`.
///
/// `limit` defaults to 5 and is capped at 20. A `limit` of 0 returns no results.
pub async fn knowledge_search_handler(
    State(app_state): State<AppState>,
    params: Result<Query<KnowledgeSearchParams>, QueryRejection>,
) -> Result<Json<KnowledgeSearchResponse>, AppError> {
    let Query(params) = params?;
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter 'q' is required.".to_string()))?;
    let limit = params
        .limit
        .unwrap_or(DEFAULT_KNOWLEDGE_SEARCH_LIMIT)
        .min(MAX_KNOWLEDGE_SEARCH_LIMIT);

    let results: Vec<KnowledgeHit> = search(&app_state.knowledge_base, &query, limit)
        .into_iter()
        .map(|result| KnowledgeHit {
            id: result.entry.id.clone(),
            category: result.entry.category,
            title: result.entry.title.clone(),
            content: result.entry.content.clone(),
            score: result.score,
        })
        .collect();
    info!(query = %query, limit, hits = results.len(), "Knowledge search served.");

    Ok(Json(KnowledgeSearchResponse {
        query,
        count: results.len(),
        results,
    }))
}

/// Handler for `GET /support-chat/knowledge/{id}`. Returns the raw entry.
pub async fn knowledge_entry_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<KnowledgeEntry>, AppError> {
    app_state
        .knowledge_base
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Knowledge entry not found".to_string()))
}
