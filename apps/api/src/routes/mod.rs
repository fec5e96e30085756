pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::recommender::handlers as rec;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(rec::handle_all_recommendations),
        )
        .route(
            "/api/v1/recommendations/careers",
            post(rec::handle_career_recommendations),
        )
        .route(
            "/api/v1/recommendations/portfolio",
            post(rec::handle_portfolio_recommendations),
        )
        .route(
            "/api/v1/recommendations/courses",
            post(rec::handle_course_recommendations),
        )
        .route(
            "/api/v1/recommendations/clubs",
            post(rec::handle_club_recommendations),
        )
        // Roadmap
        .route("/api/v1/roadmap", post(roadmap::handle_roadmap))
        .route(
            "/api/v1/roadmap/summary",
            post(roadmap::handle_roadmap_summary),
        )
        .with_state(state)
}
