use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::MatchResult;
use crate::models::catalog::{Career, Club, Course, PortfolioItem, Season};
use crate::models::profile::StudentProfile;
use crate::recommender::engine::{
    AllRecommendations, RecommendationEngine, DEFAULT_CAREER_LIMIT, DEFAULT_CLUB_LIMIT,
    DEFAULT_COURSE_LIMIT, DEFAULT_PORTFOLIO_LIMIT,
};
use crate::state::AppState;

/// Request body shared by the single-category recommendation endpoints.
/// The profile is supplied by the hosting layer; nothing is persisted.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub profile: StudentProfile,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CourseRecommendRequest {
    pub profile: StudentProfile,
    #[serde(default)]
    pub semester: Option<Season>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    pub profile: StudentProfile,
}

/// POST /api/v1/recommendations
pub async fn handle_all_recommendations(
    State(state): State<AppState>,
    Json(req): Json<DashboardRequest>,
) -> Result<Json<AllRecommendations>, AppError> {
    let engine = RecommendationEngine::new(&req.profile, state.catalog.as_ref());
    Ok(Json(engine.all_recommendations()))
}

/// POST /api/v1/recommendations/careers
pub async fn handle_career_recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<Vec<MatchResult<Career>>>, AppError> {
    let engine = RecommendationEngine::new(&req.profile, state.catalog.as_ref());
    Ok(Json(
        engine.career_recommendations(req.limit.unwrap_or(DEFAULT_CAREER_LIMIT)),
    ))
}

/// POST /api/v1/recommendations/portfolio
pub async fn handle_portfolio_recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<Vec<MatchResult<PortfolioItem>>>, AppError> {
    let engine = RecommendationEngine::new(&req.profile, state.catalog.as_ref());
    Ok(Json(
        engine.portfolio_recommendations(req.limit.unwrap_or(DEFAULT_PORTFOLIO_LIMIT)),
    ))
}

/// POST /api/v1/recommendations/courses
pub async fn handle_course_recommendations(
    State(state): State<AppState>,
    Json(req): Json<CourseRecommendRequest>,
) -> Result<Json<Vec<MatchResult<Course>>>, AppError> {
    let engine = RecommendationEngine::new(&req.profile, state.catalog.as_ref());
    Ok(Json(engine.course_recommendations(
        req.semester.unwrap_or_default(),
        req.limit.unwrap_or(DEFAULT_COURSE_LIMIT),
    )))
}

/// POST /api/v1/recommendations/clubs
pub async fn handle_club_recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<Vec<MatchResult<Club>>>, AppError> {
    let engine = RecommendationEngine::new(&req.profile, state.catalog.as_ref());
    Ok(Json(
        engine.club_recommendations(req.limit.unwrap_or(DEFAULT_CLUB_LIMIT)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_recommend_request_limit_optional() {
        let json = format!(r#"{{"profile": {{"id": "{}"}}}}"#, Uuid::new_v4());
        let req: RecommendRequest = serde_json::from_str(&json).unwrap();
        assert!(req.limit.is_none());
    }

    #[test]
    fn test_course_request_accepts_semester() {
        let json = format!(
            r#"{{"profile": {{"id": "{}"}}, "semester": "SPRING", "limit": 4}}"#,
            Uuid::new_v4()
        );
        let req: CourseRecommendRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.semester, Some(Season::Spring));
        assert_eq!(req.limit, Some(4));
    }
}
