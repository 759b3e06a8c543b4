//! HTTP handlers and route configuration.

mod analytics;
mod comments;
mod health;
mod likes;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
///
/// Collection endpoints keep their trailing slash; `/users/` and `/users/7`
/// are distinct resources.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::liveness))
        .route("/health", web::get().to(health::health_check))
        .route("/users/", web::post().to(users::create_user))
        .route("/users/", web::get().to(users::list_users))
        .route("/users/{user_id}", web::get().to(users::get_user))
        .route("/users/{user_id}", web::put().to(users::update_user))
        .route("/users/{user_id}", web::delete().to(users::delete_user))
        .route("/posts/", web::post().to(posts::create_post))
        .route("/posts/", web::get().to(posts::list_posts))
        .route("/likes/", web::post().to(likes::create_like))
        .route("/likes/", web::delete().to(likes::remove_like))
        .route("/comments/", web::post().to(comments::create_comment))
        .service(
            web::scope("/analytics")
                .route("/top-posts", web::get().to(analytics::top_posts))
                .route("/user-summary", web::get().to(analytics::user_summary))
                .route(
                    "/engagement-stats",
                    web::get().to(analytics::engagement_stats),
                )
                .route(
                    "/union-activities",
                    web::get().to(analytics::union_activities),
                )
                .route("/search-posts", web::get().to(analytics::search_posts))
                .route(
                    "/refresh-materialized",
                    web::post().to(analytics::refresh_materialized),
                )
                .route(
                    "/group-by-engagement",
                    web::get().to(analytics::group_by_engagement),
                )
                .route("/export-report", web::get().to(analytics::export_report)),
        );
}
