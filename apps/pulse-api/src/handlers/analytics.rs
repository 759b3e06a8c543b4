//! Reporting handlers over the analytics store surface.
//!
//! Read endpoints serialize the store's read models directly; only the
//! refresh trigger mutates anything.

use actix_web::{HttpResponse, http::header, web};

use pulse_shared::dto::{MessageResponse, SearchQuery, TopPostsQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Column names of the `top_posts` view, in view order. Written explicitly
/// so the CSV keeps its header row even when the ranking is empty.
const REPORT_COLUMNS: [&str; 7] = [
    "post_id",
    "username",
    "content",
    "like_count",
    "comment_count",
    "engagement_score",
    "rank",
];

/// GET /analytics/top-posts
pub async fn top_posts(
    state: web::Data<AppState>,
    query: web::Query<TopPostsQuery>,
) -> AppResult<HttpResponse> {
    let limit = query.limit.unwrap_or(10);
    let posts = state.store.top_posts(limit).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /analytics/user-summary
pub async fn user_summary(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let summary = state.store.user_summary().await?;

    Ok(HttpResponse::Ok().json(summary))
}

/// GET /analytics/engagement-stats
pub async fn engagement_stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let stats = state.store.engagement_stats().await?;

    Ok(HttpResponse::Ok().json(stats))
}

/// GET /analytics/union-activities
pub async fn union_activities(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let feed = state.store.union_activities().await?;

    Ok(HttpResponse::Ok().json(feed))
}

/// GET /analytics/search-posts?query=term
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let hits = state.store.search_posts(&query.query).await?;

    Ok(HttpResponse::Ok().json(hits))
}

/// POST /analytics/refresh-materialized
pub async fn refresh_materialized(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state
        .store
        .refresh_materialized()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "Materialized views and metrics refreshed successfully",
    )))
}

/// GET /analytics/group-by-engagement
pub async fn group_by_engagement(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let groups = state.store.engagement_groups().await?;

    Ok(HttpResponse::Ok().json(groups))
}

/// GET /analytics/export-report
///
/// The whole `top_posts` ranking as a CSV attachment.
pub async fn export_report(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.store.export_top_posts().await?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(REPORT_COLUMNS)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    for post in &posts {
        writer
            .serialize(post)
            .map_err(|e| AppError::Internal(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            "attachment; filename=engagement_report.csv",
        ))
        .body(bytes))
}
